// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施服务模块
///
/// 提供基础设施层的服务实现
pub mod localization_service_impl;
pub mod message_queue;
pub mod webhook_service_impl;
