// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 负责把宿主发来的请求转换为领域事件和配置
pub mod dto;
