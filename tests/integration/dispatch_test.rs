// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workflow_webhook::domain::models::transition::{ActingUser, ItemDetails, TransitionEvent};
use workflow_webhook::domain::models::webhook::{
    DispatchOutcome, WebhookConfig, WebhookHeader, WebhookMethod,
};
use workflow_webhook::domain::services::webhook_service::DispatchError;
use workflow_webhook::domain::use_cases::dispatch_webhook::WebhookDispatcher;
use workflow_webhook::infrastructure::repositories::item_repo_impl::InMemoryItemRepository;
use workflow_webhook::infrastructure::services::localization_service_impl::CatalogStageLocalizer;
use workflow_webhook::infrastructure::services::message_queue::MessageQueue;
use workflow_webhook::infrastructure::services::webhook_service_impl::WebhookServiceImpl;

fn event(item_ids: Vec<i64>, language: Option<&str>) -> TransitionEvent {
    let items = HashMap::from([
        (
            10,
            ItemDetails {
                title: "Draft A".to_string(),
                category_name: "News".to_string(),
            },
        ),
        (
            11,
            ItemDetails {
                title: "Draft B".to_string(),
                category_name: "Sport".to_string(),
            },
        ),
    ]);

    TransitionEvent {
        context_key: "com_content.article".to_string(),
        extension_name: Some("com_content".to_string()),
        item_ids,
        to_stage_name: "Published".to_string(),
        acting_user: ActingUser {
            email: "a@x.com".to_string(),
            admin_language: language.map(str::to_string),
        },
        item_lookup: Arc::new(InMemoryItemRepository::new(items)),
    }
}

fn dispatcher(messages: Arc<MessageQueue>) -> WebhookDispatcher {
    let catalogs = HashMap::from([(
        "de-DE".to_string(),
        HashMap::from([("Published".to_string(), "Veröffentlicht".to_string())]),
    )]);
    WebhookDispatcher::new(
        Arc::new(WebhookServiceImpl::new(Duration::from_secs(5), "dispatch-test")),
        Arc::new(CatalogStageLocalizer::new("en-GB", catalogs)),
        messages,
    )
}

#[tokio::test]
async fn delete_sends_rendered_payloads_in_item_order() {
    let hooks = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(header("x-first", "1"))
        .and(header("x-second", "2"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .expect(2)
        .mount(&hooks)
        .await;

    let config = WebhookConfig {
        enabled: true,
        url: Some(hooks.uri()),
        method: Some(WebhookMethod::Delete),
        message_template: Some(
            r#"{"message":"{TITLE} by {USER} -> {STATE} ({CATEGORY})"}"#.to_string(),
        ),
        headers: vec![
            WebhookHeader::new("X-First", "1"),
            WebhookHeader::new("", "skip"),
            WebhookHeader::new("X-Second", "2"),
        ],
    };

    let messages = Arc::new(MessageQueue::new());
    let results = dispatcher(messages.clone())
        .dispatch(&event(vec![10, 11], None), &config)
        .await;

    assert_eq!(results.len(), 2);
    for result in &results {
        match &result.outcome {
            DispatchOutcome::Sent {
                status,
                response_body,
            } => {
                assert_eq!(*status, 202);
                assert_eq!(response_body.as_deref(), Some("queued"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        let call = result.call.as_ref().unwrap();
        assert_eq!(call.headers, vec!["X-First: 1", "X-Second: 2"]);
    }
    assert_eq!(messages.len(), 2);

    let bodies: Vec<Value> = hooks
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(
        bodies,
        vec![
            json!({ "message": "Draft A by a@x.com -> Published (News)" }),
            json!({ "message": "Draft B by a@x.com -> Published (Sport)" }),
        ]
    );
}

#[tokio::test]
async fn state_is_localized_for_the_acting_user() {
    let hooks = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&hooks)
        .await;

    let config = WebhookConfig {
        enabled: true,
        url: Some(hooks.uri()),
        method: Some(WebhookMethod::Post),
        message_template: Some(r#"{"state":"{STATE}"}"#.to_string()),
        headers: Vec::new(),
    };

    let results = dispatcher(Arc::new(MessageQueue::new()))
        .dispatch(&event(vec![10], Some("de-DE")), &config)
        .await;

    assert!(results[0].outcome.is_sent());
    let received = hooks.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body, json!({ "state": "Veröffentlicht" }));
}

#[tokio::test]
async fn unreachable_target_fails_each_item_independently() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = WebhookConfig {
        enabled: true,
        url: Some(format!("http://{}/", addr)),
        method: Some(WebhookMethod::Post),
        message_template: None,
        headers: Vec::new(),
    };

    let messages = Arc::new(MessageQueue::new());
    let results = dispatcher(messages.clone())
        .dispatch(&event(vec![10, 11, 12], None), &config)
        .await;

    assert_eq!(results.len(), 3);
    for result in &results {
        assert!(matches!(
            result.outcome,
            DispatchOutcome::Failed(DispatchError::Transport(_))
        ));
    }
    assert!(messages.is_empty());
}
