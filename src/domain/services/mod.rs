// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 上下文过滤（context_gate）：判断流转上下文是否需要发送Webhook
/// - 本地化服务（localization_service）：阶段名称翻译接口
/// - 通知服务（notification_service）：用户提示队列接口
/// - 模板服务（template_service）：消息模板的占位符替换
/// - Webhook服务（webhook_service）：单次请求的传输接口和错误类型
pub mod context_gate;
pub mod localization_service;
pub mod notification_service;
pub mod template_service;
pub mod webhook_service;
