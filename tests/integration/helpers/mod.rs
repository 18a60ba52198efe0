// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use axum_test::TestServer;
use std::sync::Arc;
use workflow_webhook::config::settings::Settings;
use workflow_webhook::presentation::routes;
use workflow_webhook::presentation::state::AppState;

/// 使用默认配置创建测试服务
pub fn create_test_app() -> TestServer {
    let settings = Settings::defaults().expect("default settings");
    create_test_app_with_settings(&settings)
}

/// 使用指定配置创建测试服务
pub fn create_test_app_with_settings(settings: &Settings) -> TestServer {
    let state = Arc::new(AppState::from_settings(settings));
    let app = routes::routes().layer(Extension(state));
    TestServer::new(app).unwrap()
}
