// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::transition::{ActingUser, ItemDetails, TransitionEvent};
use crate::domain::models::webhook::{
    DispatchOutcome, DispatchResult, TransitionOptions, WebhookConfig, WebhookMethod,
};
use crate::domain::services::notification_service::UserMessage;
use crate::domain::services::webhook_service::DispatchError;
use crate::infrastructure::repositories::item_repo_impl::InMemoryItemRepository;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use validator::Validate;

/// 流转完成通知
///
/// 宿主在流转完成后发送，条目信息已由宿主解析好
#[derive(Debug, Deserialize, Validate)]
pub struct TransitionNotificationDto {
    /// 上下文，形如 `com_content.article`
    #[validate(length(min = 1))]
    pub extension: String,
    #[serde(default, rename = "extensionName")]
    pub extension_name: Option<String>,
    /// 受影响条目ID，允许数字字符串
    #[serde(default, deserialize_with = "deserialize_item_ids")]
    pub pks: Vec<i64>,
    #[validate(nested)]
    pub transition: TransitionDto,
    pub user: ActingUser,
    #[serde(default)]
    pub items: HashMap<i64, ItemDetails>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TransitionDto {
    /// 目标阶段标题
    #[serde(alias = "to_stage")]
    #[validate(length(min = 1))]
    pub to_stage_title: String,
    #[serde(default)]
    pub options: TransitionOptions,
}

impl TransitionNotificationDto {
    /// 拆分为领域事件和Webhook配置
    pub fn into_parts(self) -> (TransitionEvent, WebhookConfig) {
        let config = WebhookConfig::from_options(&self.transition.options);
        let event = TransitionEvent {
            context_key: self.extension,
            extension_name: self.extension_name,
            item_ids: self.pks,
            to_stage_name: self.transition.to_stage_title,
            acting_user: self.user,
            item_lookup: Arc::new(InMemoryItemRepository::new(self.items)),
        };
        (event, config)
    }
}

/// 宿主传来的ID可能是数字或数字字符串，无法转换的ID会被丢弃
fn deserialize_item_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .collect())
}

/// 单个条目的处理结果
#[derive(Debug, Serialize)]
pub struct DispatchResultDto {
    pub item_id: i64,
    /// sent / skipped / failed
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<WebhookMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub dispatched_at: DateTime<Utc>,
}

impl From<DispatchResult> for DispatchResultDto {
    fn from(result: DispatchResult) -> Self {
        let method = result.call.as_ref().map(|c| c.method);
        let (status, http_status, reason, error) = match result.outcome {
            DispatchOutcome::Sent { status, .. } => ("sent", Some(status), None, None),
            DispatchOutcome::Skipped(reason) => ("skipped", None, Some(reason.as_str()), None),
            DispatchOutcome::Failed(e) => {
                let http_status = match &e {
                    DispatchError::HttpStatus { status, .. } => Some(*status),
                    _ => None,
                };
                ("failed", http_status, Some(e.reason()), Some(e.to_string()))
            }
        };

        Self {
            item_id: result.item_id,
            status,
            method,
            http_status,
            reason,
            error,
            dispatched_at: result.dispatched_at,
        }
    }
}

/// 通知处理响应
#[derive(Debug, Serialize)]
pub struct TransitionNotificationResponseDto {
    pub results: Vec<DispatchResultDto>,
    pub messages: Vec<UserMessage>,
}
