// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_with_settings};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workflow_webhook::config::settings::Settings;

fn notification(url: &str, method: &str, template: &str, pks: Value) -> Value {
    json!({
        "extension": "com_content.article",
        "extensionName": "com_content",
        "pks": pks,
        "transition": {
            "to_stage_title": "Published",
            "options": {
                "webhook_send_notification": "1",
                "webhook_url": url,
                "webhook_method": method,
                "webhook_text": template,
                "webhook_headers": [
                    { "name": "X-Token", "value": "secret" },
                    { "name": "", "value": "dropped" }
                ]
            }
        },
        "user": { "email": "a@x.com" },
        "items": {
            "1": { "title": "Item 1", "category": "News" },
            "2": { "title": "Item 2", "category": "News" },
            "3": { "title": "Item 3", "category": "Blog" }
        }
    })
}

#[tokio::test]
async fn post_transition_sends_one_webhook_per_item() {
    let hooks = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cms"))
        .and(header("x-token", "secret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&hooks)
        .await;

    let server = create_test_app();
    let response = server
        .post("/v1/workflow/transitions")
        .json(&notification(
            &format!("{}/cms", hooks.uri()),
            "POST",
            r#"{"text":"{TITLE} by {USER} -> {STATE} ({CATEGORY})"}"#,
            json!([1, 2, 3]),
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    for (result, id) in results.iter().zip(1..) {
        assert_eq!(result["item_id"], id);
        assert_eq!(result["status"], "sent");
        assert_eq!(result["method"], "POST");
        assert_eq!(result["http_status"], 200);
    }
    assert_eq!(body["messages"].as_array().unwrap().len(), 3);
    assert_eq!(body["messages"][0]["text"], "Webhook sent.");

    let received = hooks.received_requests().await.unwrap();
    let first: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(first, json!({ "text": "Item 1 by a@x.com -> Published (News)" }));
}

#[tokio::test]
async fn failing_item_does_not_block_the_others() {
    let hooks = MockServer::start().await;
    for (title, status) in [("Item 1", 200), ("Item 2", 500), ("Item 3", 200)] {
        Mock::given(method("PUT"))
            .and(body_json(json!({ "title": title })))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&hooks)
            .await;
    }

    let server = create_test_app();
    let response = server
        .post("/v1/workflow/transitions")
        .json(&notification(
            &hooks.uri(),
            "put",
            r#"{"title":"{TITLE}"}"#,
            json!([1, 2, 3]),
        ))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let statuses: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["sent", "failed", "sent"]);
    assert_eq!(body["results"][1]["reason"], "http_error");
    assert_eq!(body["results"][1]["http_status"], 500);
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn disabled_notification_sends_nothing() {
    let hooks = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&hooks)
        .await;

    let mut request = notification(&hooks.uri(), "POST", "", json!([1, 2]));
    request["transition"]["options"]["webhook_send_notification"] = json!(0);

    let server = create_test_app();
    let response = server.post("/v1/workflow/transitions").json(&request).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["results"].as_array().unwrap().is_empty());
    assert!(body["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_transition_sends_no_body_or_headers() {
    let hooks = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&hooks)
        .await;

    let server = create_test_app();
    let response = server
        .post("/v1/workflow/transitions")
        .json(&notification(
            &format!("{}/ping", hooks.uri()),
            "get",
            r#"{"title":"{TITLE}"}"#,
            json!(["1"]),
        ))
        .await;

    response.assert_status_ok();
    let received = hooks.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn unsupported_method_is_skipped() {
    let hooks = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&hooks)
        .await;

    let server = create_test_app();
    let response = server
        .post("/v1/workflow/transitions")
        .json(&notification(&hooks.uri(), "patch", "", json!([1])))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["results"][0]["status"], "skipped");
    assert_eq!(body["results"][0]["reason"], "missing_method");
}

#[tokio::test]
async fn malformed_template_fails_without_calling_out() {
    let hooks = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&hooks)
        .await;

    let server = create_test_app();
    let response = server
        .post("/v1/workflow/transitions")
        .json(&notification(&hooks.uri(), "post", "{TITLE} published", json!([1])))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["results"][0]["status"], "failed");
    assert_eq!(body["results"][0]["reason"], "malformed_payload");
}

#[tokio::test]
async fn forbidden_context_is_ignored() {
    let hooks = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&hooks)
        .await;

    let mut settings = Settings::defaults().unwrap();
    settings.workflow.forbidden_contexts = vec!["com_content".to_string()];
    let server = create_test_app_with_settings(&settings);

    let response = server
        .post("/v1/workflow/transitions")
        .json(&notification(&hooks.uri(), "post", "", json!([1])))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_extension_is_rejected() {
    let server = create_test_app();
    let mut request = notification("http://127.0.0.1:1/", "post", "", json!([1]));
    request["extension"] = json!("");

    let response = server.post("/v1/workflow/transitions").json(&request).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Validation error"));
}
