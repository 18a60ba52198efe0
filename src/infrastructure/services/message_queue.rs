// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::notification_service::{MessageLevel, MessageSink, UserMessage};
use parking_lot::Mutex;

/// 内存中的用户提示队列
///
/// 每个请求创建一个，处理完成后取出全部提示返回给调用方
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Mutex<Vec<UserMessage>>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出并清空队列
    pub fn drain(&self) -> Vec<UserMessage> {
        std::mem::take(&mut *self.messages.lock())
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl MessageSink for MessageQueue {
    fn enqueue(&self, text: &str, level: MessageLevel) {
        self.messages.lock().push(UserMessage {
            level,
            text: text.to_string(),
        });
    }
}
