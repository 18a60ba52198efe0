// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use workflow_webhook::config::settings::Settings;
use workflow_webhook::infrastructure::metrics;
use workflow_webhook::presentation::routes;
use workflow_webhook::presentation::state::AppState;
use workflow_webhook::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting workflow-webhook...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    // 3. Build shared services
    let state = Arc::new(AppState::from_settings(&settings));
    info!(
        "Webhook transport ready (timeout {}s)",
        settings.webhook.timeout_secs
    );

    // 4. Start HTTP server
    let app = routes::routes()
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
