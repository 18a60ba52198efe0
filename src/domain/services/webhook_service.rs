// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::RenderedCall;
use async_trait::async_trait;
use thiserror::Error;

/// Webhook发送错误
#[derive(Error, Debug)]
pub enum DispatchError {
    /// 渲染后的消息不是合法的JSON
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    /// 目标URL无法解析
    #[error("Invalid webhook url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// 连接失败、超时等传输层错误
    #[error("Transport failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 目标返回非2xx状态
    #[error("Webhook returned HTTP {status}")]
    HttpStatus { status: u16, body: Option<String> },
}

impl DispatchError {
    /// 用于指标标签的错误分类
    pub fn reason(&self) -> &'static str {
        match self {
            DispatchError::MalformedPayload(_) => "malformed_payload",
            DispatchError::InvalidUrl { .. } => "invalid_url",
            DispatchError::Transport(_) => "network_error",
            DispatchError::HttpStatus { .. } => "http_error",
        }
    }
}

/// Webhook响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// HTTP状态码
    pub status: u16,
    /// 响应体，仅供日志使用
    pub body: Option<String>,
}

/// Webhook传输特质
///
/// 定义单次Webhook请求的发送逻辑
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// 发送渲染好的请求
    ///
    /// # 参数
    ///
    /// * `call` - 渲染后的请求
    /// * `payload` - 已解析的消息体，GET 请求忽略
    ///
    /// # 返回值
    ///
    /// * `Ok(WebhookResponse)` - 发送成功
    /// * `Err(DispatchError)` - 发送失败
    async fn send(
        &self,
        call: &RenderedCall,
        payload: Option<&serde_json::Value>,
    ) -> Result<WebhookResponse, DispatchError>;
}
