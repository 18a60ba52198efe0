// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 发送成功时展示给用户的提示
pub const WEBHOOK_SENT_MESSAGE: &str = "Webhook sent.";

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Message,
    Notice,
    Warning,
    Error,
}

/// 用户提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// 用户提示队列特质
pub trait MessageSink: Send + Sync {
    /// 排入一条提示
    fn enqueue(&self, text: &str, level: MessageLevel);
}
