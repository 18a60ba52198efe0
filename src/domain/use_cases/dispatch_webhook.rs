// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::transition::{ItemDetails, TransitionEvent};
use crate::domain::models::webhook::{
    DispatchOutcome, DispatchResult, RenderedCall, SkipReason, WebhookConfig,
};
use crate::domain::services::context_gate::ContextGate;
use crate::domain::services::localization_service::StageLocalizer;
use crate::domain::services::notification_service::{
    MessageLevel, MessageSink, WEBHOOK_SENT_MESSAGE,
};
use crate::domain::services::template_service::{render_template, TemplateTokens};
use crate::domain::services::webhook_service::{DispatchError, WebhookTransport};
use chrono::Utc;
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Webhook调度器
///
/// 在流转完成后为每个受影响条目渲染消息并发送一次请求。
/// 条目按顺序逐个处理，单个条目失败不会中断后续条目，
/// 也不会向上返回错误。
pub struct WebhookDispatcher {
    transport: Arc<dyn WebhookTransport>,
    localizer: Arc<dyn StageLocalizer>,
    messages: Arc<dyn MessageSink>,
    gate: ContextGate,
}

impl WebhookDispatcher {
    /// 创建新的调度器
    ///
    /// # 参数
    ///
    /// * `transport` - HTTP传输实现
    /// * `localizer` - 阶段名称本地化
    /// * `messages` - 用户提示队列
    pub fn new(
        transport: Arc<dyn WebhookTransport>,
        localizer: Arc<dyn StageLocalizer>,
        messages: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            transport,
            localizer,
            messages,
            gate: ContextGate::permissive(),
        }
    }

    /// 设置上下文过滤
    pub fn with_gate(mut self, gate: ContextGate) -> Self {
        self.gate = gate;
        self
    }

    /// 处理一次流转事件
    ///
    /// # 参数
    ///
    /// * `event` - 流转完成事件
    /// * `config` - 该流转的Webhook配置
    ///
    /// # 返回值
    ///
    /// 每个被处理的条目对应一个结果；未启用、上下文不支持或没有条目时返回空列表
    pub async fn dispatch(
        &self,
        event: &TransitionEvent,
        config: &WebhookConfig,
    ) -> Vec<DispatchResult> {
        if !self.gate.is_supported(&event.context_key) {
            debug!("Context {} is not handled by webhook dispatch", event.context_key);
            return Vec::new();
        }

        if !config.enabled {
            debug!("Webhook notification disabled for {}", event.context_key);
            return Vec::new();
        }

        if event.item_ids.is_empty() {
            return Vec::new();
        }

        let state = self.localizer.localize(
            &event.to_stage_name,
            event.acting_user.admin_language.as_deref(),
        );

        let mut results = Vec::with_capacity(event.item_ids.len());
        for &item_id in &event.item_ids {
            let result = self.dispatch_item(event, config, item_id, &state).await;
            results.push(result);
        }
        results
    }

    async fn dispatch_item(
        &self,
        event: &TransitionEvent,
        config: &WebhookConfig,
        item_id: i64,
        state: &str,
    ) -> DispatchResult {
        let item = self.lookup_item(event, item_id).await;

        let body = config.message_template.as_deref().map(|template| {
            render_template(
                template,
                &TemplateTokens {
                    title: &item.title,
                    user: &event.acting_user.email,
                    state,
                    category: &item.category_name,
                },
            )
        });

        let method = match config.method {
            Some(method) => method,
            None => return skipped(item_id, SkipReason::MissingMethod),
        };
        let url = match config.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => return skipped(item_id, SkipReason::MissingUrl),
        };

        let call = RenderedCall {
            method,
            url,
            body: if method.sends_body() { body } else { None },
            headers: if method.sends_headers() {
                config.header_lines()
            } else {
                Vec::new()
            },
        };

        let outcome = self.send(item_id, &call).await;
        DispatchResult {
            item_id,
            call: Some(call),
            outcome,
            dispatched_at: Utc::now(),
        }
    }

    async fn lookup_item(&self, event: &TransitionEvent, item_id: i64) -> ItemDetails {
        match event.item_lookup.find_item(item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                warn!("Item {} not found, rendering with empty title", item_id);
                ItemDetails::default()
            }
            Err(e) => {
                warn!("Item lookup for {} failed: {}", item_id, e);
                ItemDetails::default()
            }
        }
    }

    async fn send(&self, item_id: i64, call: &RenderedCall) -> DispatchOutcome {
        let payload = match call.body.as_deref().filter(|b| !b.is_empty()) {
            Some(body) => match serde_json::from_str::<serde_json::Value>(body) {
                Ok(value) => Some(value),
                Err(e) => {
                    error!("Webhook payload for item {} is not valid JSON: {}", item_id, e);
                    counter!("webhook_dispatch_failed_total", "reason" => "malformed_payload")
                        .increment(1);
                    return DispatchOutcome::Failed(DispatchError::MalformedPayload(e));
                }
            },
            None => None,
        };

        info!("Sending {} webhook for item {} to {}", call.method, item_id, call.url);
        counter!("webhook_dispatch_attempts_total", "method" => call.method.as_str()).increment(1);
        let start = Instant::now();

        let response = self.transport.send(call, payload.as_ref()).await;
        histogram!("webhook_dispatch_duration_seconds").record(start.elapsed().as_secs_f64());

        match response {
            Ok(response) => {
                info!("Webhook for item {} delivered with status {}", item_id, response.status);
                counter!("webhook_dispatch_success_total").increment(1);
                self.messages.enqueue(WEBHOOK_SENT_MESSAGE, MessageLevel::Message);
                DispatchOutcome::Sent {
                    status: response.status,
                    response_body: response.body,
                }
            }
            Err(e) => {
                error!("Webhook for item {} failed: {}", item_id, e);
                counter!("webhook_dispatch_failed_total", "reason" => e.reason()).increment(1);
                DispatchOutcome::Failed(e)
            }
        }
    }
}

fn skipped(item_id: i64, reason: SkipReason) -> DispatchResult {
    debug!("Skipping webhook for item {}: {}", item_id, reason.as_str());
    counter!("webhook_dispatch_skipped_total", "reason" => reason.as_str()).increment(1);
    DispatchResult {
        item_id,
        call: None,
        outcome: DispatchOutcome::Skipped(reason),
        dispatched_at: Utc::now(),
    }
}
