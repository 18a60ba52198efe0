// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::services::webhook_service::DispatchError;

/// Webhook HTTP方法
///
/// 每个流转配置只能选择一种方法，方法名不区分大小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl WebhookMethod {
    /// 是否随请求发送消息体
    pub fn sends_body(self) -> bool {
        !matches!(self, WebhookMethod::Get)
    }

    /// 是否附加自定义请求头
    pub fn sends_headers(self) -> bool {
        !matches!(self, WebhookMethod::Get)
    }

    /// 非2xx响应是否视为失败
    ///
    /// GET 只在传输层失败时才算失败
    pub fn fails_on_http_error(self) -> bool {
        !matches!(self, WebhookMethod::Get)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WebhookMethod::Get => "GET",
            WebhookMethod::Post => "POST",
            WebhookMethod::Put => "PUT",
            WebhookMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for WebhookMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 不支持的HTTP方法
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported webhook method: {0}")]
pub struct UnsupportedMethod(pub String);

impl FromStr for WebhookMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(WebhookMethod::Get),
            "post" => Ok(WebhookMethod::Post),
            "put" => Ok(WebhookMethod::Put),
            "delete" => Ok(WebhookMethod::Delete),
            other => Err(UnsupportedMethod(other.to_string())),
        }
    }
}

/// 自定义请求头
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookHeader {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl WebhookHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// 流转上保存的原始Webhook选项
///
/// 字段名与宿主系统表单字段保持一致
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitionOptions {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub webhook_send_notification: bool,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub webhook_method: Option<String>,
    #[serde(default)]
    pub webhook_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_headers")]
    pub webhook_headers: Vec<WebhookHeader>,
}

/// 宿主系统的开关字段可能是布尔值、数字或字符串
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !matches!(s.trim(), "" | "0" | "false"),
        serde_json::Value::Null => false,
        serde_json::Value::Array(a) => !a.is_empty(),
        serde_json::Value::Object(o) => !o.is_empty(),
    })
}

/// 请求头可能是数组，也可能是以 `webhook_headers0` 等为键的对象
fn deserialize_headers<'de, D>(deserializer: D) -> Result<Vec<WebhookHeader>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(rows) => rows.into_iter().map(|(_, row)| row).collect(),
        _ => Vec::new(),
    };
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(serde::de::Error::custom))
        .collect()
}

/// Webhook配置快照
///
/// 每次调用时由宿主传入，调度过程中不可变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookConfig {
    /// 是否启用通知
    pub enabled: bool,
    /// 目标URL
    pub url: Option<String>,
    /// HTTP方法，未设置或不支持时跳过发送
    pub method: Option<WebhookMethod>,
    /// 消息模板
    pub message_template: Option<String>,
    /// 自定义请求头，保持配置顺序
    pub headers: Vec<WebhookHeader>,
}

impl WebhookConfig {
    /// 从流转选项构建配置
    ///
    /// 空字符串视为未设置，未知方法视为未设置
    pub fn from_options(options: &TransitionOptions) -> Self {
        let method = options
            .webhook_method
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .and_then(|m| m.parse().ok());

        Self {
            enabled: options.webhook_send_notification,
            url: non_empty(options.webhook_url.as_deref()),
            method,
            message_template: non_empty(options.webhook_text.as_deref()),
            headers: options.webhook_headers.clone(),
        }
    }

    /// 组装 "Name: Value" 形式的请求头，跳过空名称
    pub fn header_lines(&self) -> Vec<String> {
        self.headers
            .iter()
            .filter(|h| !h.name.is_empty())
            .map(|h| format!("{}: {}", h.name, h.value))
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// 单个条目渲染出的请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCall {
    pub method: WebhookMethod,
    pub url: String,
    pub body: Option<String>,
    pub headers: Vec<String>,
}

/// 跳过原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingMethod,
    MissingUrl,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::MissingMethod => "missing_method",
            SkipReason::MissingUrl => "missing_url",
        }
    }
}

/// 单个条目的发送结果
#[derive(Debug)]
pub enum DispatchOutcome {
    /// 请求已完成
    Sent {
        status: u16,
        response_body: Option<String>,
    },
    /// 未发送，不视为错误
    Skipped(SkipReason),
    /// 发送失败，不影响后续条目
    Failed(DispatchError),
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DispatchOutcome::Failed(_))
    }
}

/// 调度结果
#[derive(Debug)]
pub struct DispatchResult {
    /// 条目ID
    pub item_id: i64,
    /// 渲染出的请求，跳过时为空
    pub call: Option<RenderedCall>,
    /// 结果
    pub outcome: DispatchOutcome,
    /// 处理时间
    pub dispatched_at: DateTime<Utc>,
}
