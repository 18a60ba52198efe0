// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含服务器、Webhook发送、工作流上下文过滤、本地化和指标等配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Webhook 配置
    pub webhook: WebhookSettings,
    /// 工作流上下文配置
    pub workflow: WorkflowSettings,
    /// 本地化配置
    pub localization: LocalizationSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Webhook配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookSettings {
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 请求使用的User-Agent
    pub user_agent: String,
}

impl WebhookSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 工作流上下文配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowSettings {
    /// 允许的上下文，为空表示全部允许
    #[serde(default)]
    pub allowed_contexts: Vec<String>,
    /// 禁止的上下文
    #[serde(default)]
    pub forbidden_contexts: Vec<String>,
}

/// 本地化配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizationSettings {
    /// 系统默认语言
    pub default_language: String,
    /// 语言 -> (阶段标题 -> 翻译)
    #[serde(default)]
    pub catalogs: HashMap<String, HashMap<String, String>>,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用Prometheus导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、配置文件和环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("WORKFLOW_WEBHOOK")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("workflow.allowed_contexts")
                    .with_list_parse_key("workflow.forbidden_contexts")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// 只使用默认值构建配置
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default Webhook settings
            .set_default("webhook.timeout_secs", 10)?
            .set_default(
                "webhook.user_agent",
                concat!("Workflow-Webhook/", env!("CARGO_PKG_VERSION")),
            )?
            // Default Workflow settings
            .set_default("workflow.allowed_contexts", Vec::<String>::new())?
            .set_default("workflow.forbidden_contexts", Vec::<String>::new())?
            // Default Localization settings
            .set_default("localization.default_language", "en-GB")?
            // Default Metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}
