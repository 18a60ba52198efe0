// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域用例模块
///
/// 当前的用例：
/// - Webhook调度（dispatch_webhook）：流转完成后为每个条目发送一次Webhook
pub mod dispatch_webhook;
