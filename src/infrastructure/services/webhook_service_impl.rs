// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{RenderedCall, WebhookMethod};
use crate::domain::services::webhook_service::{DispatchError, WebhookResponse, WebhookTransport};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::warn;

/// 默认请求超时
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Webhook传输实现
///
/// 基于reqwest发送请求，每个请求都有超时限制
pub struct WebhookServiceImpl {
    /// HTTP 客户端
    client: Client,
}

impl WebhookServiceImpl {
    /// 创建新的 Webhook 传输实现
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求超时
    /// * `user_agent` - 请求使用的User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(user_agent) {
            headers.insert(header::USER_AGENT, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// 解析 "Name: Value" 形式的请求头
    ///
    /// 不合法的请求头会被忽略
    fn parse_headers(lines: &[String]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for line in lines {
            let Some((name, value)) = line.split_once(':') else {
                warn!("Dropping malformed webhook header: {}", line);
                continue;
            };
            match (
                HeaderName::from_bytes(name.trim().as_bytes()),
                HeaderValue::from_str(value.trim()),
            ) {
                (Ok(name), Ok(value)) => {
                    // append keeps repeated names in configured order
                    headers.append(name, value);
                }
                _ => warn!("Dropping invalid webhook header: {}", name.trim()),
            }
        }
        headers
    }

    fn method(method: WebhookMethod) -> Method {
        match method {
            WebhookMethod::Get => Method::GET,
            WebhookMethod::Post => Method::POST,
            WebhookMethod::Put => Method::PUT,
            WebhookMethod::Delete => Method::DELETE,
        }
    }
}

impl Default for WebhookServiceImpl {
    fn default() -> Self {
        Self::new(
            DEFAULT_TIMEOUT,
            concat!("Workflow-Webhook/", env!("CARGO_PKG_VERSION")),
        )
    }
}

#[async_trait]
impl WebhookTransport for WebhookServiceImpl {
    async fn send(
        &self,
        call: &RenderedCall,
        payload: Option<&serde_json::Value>,
    ) -> Result<WebhookResponse, DispatchError> {
        let url = url::Url::parse(&call.url).map_err(|source| DispatchError::InvalidUrl {
            url: call.url.clone(),
            source,
        })?;

        let mut request = self.client.request(Self::method(call.method), url);

        if call.method.sends_headers() {
            request = request.headers(Self::parse_headers(&call.headers));
        }
        if call.method.sends_body() {
            if let Some(payload) = payload {
                // json() keeps a configured Content-Type header
                request = request.json(payload);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.ok().filter(|b| !b.is_empty());

        if call.method.fails_on_http_error() && !status.is_success() {
            return Err(DispatchError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(WebhookResponse {
            status: status.as_u16(),
            body,
        })
    }
}
