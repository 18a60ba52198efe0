// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::transition_request::{
    DispatchResultDto, TransitionNotificationDto, TransitionNotificationResponseDto,
};
use crate::infrastructure::services::message_queue::MessageQueue;
use crate::presentation::errors::{AppError, RequestError};
use crate::presentation::state::AppState;
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// 流转完成通知处理器
///
/// 为通知中的每个条目发送Webhook。单个条目失败只体现在结果中，
/// 整个请求仍然返回200。
pub async fn handle_transition(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<TransitionNotificationDto>,
) -> Result<Json<TransitionNotificationResponseDto>, AppError> {
    // 验证请求参数
    if let Err(errors) = request.validate() {
        return Err(RequestError::Validation(errors.to_string()).into());
    }

    let (event, config) = request.into_parts();
    info!(
        "Transition on {} to {} for {} item(s)",
        event.context_key,
        event.to_stage_name,
        event.item_ids.len()
    );

    let messages = Arc::new(MessageQueue::new());
    let results = state
        .dispatcher(messages.clone())
        .dispatch(&event, &config)
        .await;

    Ok(Json(TransitionNotificationResponseDto {
        results: results.into_iter().map(DispatchResultDto::from).collect(),
        messages: messages.drain(),
    }))
}
