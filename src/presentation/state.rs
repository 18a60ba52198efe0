// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::context_gate::ContextGate;
use crate::domain::services::localization_service::StageLocalizer;
use crate::domain::services::notification_service::MessageSink;
use crate::domain::services::webhook_service::WebhookTransport;
use crate::domain::use_cases::dispatch_webhook::WebhookDispatcher;
use crate::infrastructure::services::localization_service_impl::CatalogStageLocalizer;
use crate::infrastructure::services::webhook_service_impl::WebhookServiceImpl;
use std::sync::Arc;

/// 请求间共享的服务
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn WebhookTransport>,
    pub localizer: Arc<dyn StageLocalizer>,
    pub gate: ContextGate,
}

impl AppState {
    /// 根据配置构建
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            transport: Arc::new(WebhookServiceImpl::new(
                settings.webhook.timeout(),
                &settings.webhook.user_agent,
            )),
            localizer: Arc::new(CatalogStageLocalizer::new(
                settings.localization.default_language.clone(),
                settings.localization.catalogs.clone(),
            )),
            gate: ContextGate::new(
                settings.workflow.allowed_contexts.clone(),
                settings.workflow.forbidden_contexts.clone(),
            ),
        }
    }

    /// 为一次请求创建调度器，提示写入该请求自己的队列
    pub fn dispatcher(&self, messages: Arc<dyn MessageSink>) -> WebhookDispatcher {
        WebhookDispatcher::new(self.transport.clone(), self.localizer.clone(), messages)
            .with_gate(self.gate.clone())
    }
}
