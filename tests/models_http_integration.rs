//! Integration tests for model HTTP endpoints.
//!
//! These tests drive the full router the binary serves:
//! 1. Model lifecycle (create, list, get, delete)
//! 2. Expert submissions and their validation
//! 3. Rankings, including partial results and ties
//! 4. Export and re-import

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use group_ahp::adapters::http::{app_router, ModelsAppState};
use group_ahp::adapters::storage::InMemoryModelRepository;
use group_ahp::config::ServerConfig;
use group_ahp::domain::analysis::RankingEngine;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app() -> Router {
    let state = ModelsAppState::new(
        Arc::new(InMemoryModelRepository::new()),
        RankingEngine::default(),
    );
    app_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_model(app: &Router, alternatives: &[&str], criteria: &[&str]) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/models",
        Some(json!({
            "name": "Team offsite",
            "alternatives": alternatives,
            "criteria": criteria,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"].clone()
}

fn ids(elements: &Value) -> Vec<String> {
    elements
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect()
}

fn comparison(a: &str, b: &str, value: f64) -> Value {
    json!({ "element_a_id": a, "element_b_id": b, "value": value })
}

// =============================================================================
// Model Lifecycle
// =============================================================================

#[tokio::test]
async fn create_then_get_and_list() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost"]).await;
    let model_id = model["model_id"].as_str().unwrap();

    let (status, body) = send(&app, "GET", &format!("/models/{}", model_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Team offsite");
    assert_eq!(body["data"]["alternatives"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["expert_inputs"], json!([]));

    let (status, body) = send(&app, "GET", "/models", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_without_criteria_is_unprocessable() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/models",
        Some(json!({ "name": "x", "alternatives": ["a", "b"], "criteria": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn delete_removes_model() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost"]).await;
    let uri = format!("/models/{}", model["model_id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "MODEL_NOT_FOUND");
}

// =============================================================================
// Expert Submissions
// =============================================================================

#[tokio::test]
async fn off_scale_value_is_rejected() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost", "Fun"]).await;
    let c = ids(&model["criteria"]);
    let uri = format!("/models/{}/experts", model["model_id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        "POST",
        &uri,
        Some(json!({ "criteria_comparisons": [comparison(&c[0], &c[1], 10.0)] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn unknown_element_is_rejected() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost", "Fun"]).await;
    let c = ids(&model["criteria"]);
    let stranger = uuid::Uuid::new_v4().to_string();
    let uri = format!("/models/{}/experts", model["model_id"].as_str().unwrap());

    let (status, _) = send(
        &app,
        "POST",
        &uri,
        Some(json!({ "criteria_comparisons": [comparison(&c[0], &stranger, 3.0)] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submission_to_missing_model_is_not_found() {
    let app = test_app();
    let uri = format!("/models/{}/experts", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "POST", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Rankings
// =============================================================================

#[tokio::test]
async fn two_opposing_experts_produce_balanced_criteria() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost", "Fun"]).await;
    let model_id = model["model_id"].as_str().unwrap();
    let c = ids(&model["criteria"]);
    let a = ids(&model["alternatives"]);
    let uri = format!("/models/{}/experts", model_id);

    for criteria_value in [4.0, 0.25] {
        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some(json!({
                "criteria_comparisons": [comparison(&c[0], &c[1], criteria_value)],
                "alternatives_comparisons": {
                    c[0].as_str(): [comparison(&a[0], &a[1], 3.0)],
                    c[1].as_str(): [comparison(&a[0], &a[1], 2.0)],
                },
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "GET", &format!("/models/{}/rankings", model_id), None).await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let data = &body["data"];
    let cost = data["criteria_weights"][&c[0]].as_f64().unwrap();
    let fun = data["criteria_weights"][&c[1]].as_f64().unwrap();
    assert!((cost - 0.5).abs() < 1e-9);
    assert!((fun - 0.5).abs() < 1e-9);
    assert_eq!(data["criteria_consistency_ratio"].as_f64().unwrap(), 0.0);
    assert_eq!(data["failures"], json!({}));

    let overall = data["rankings"]["overall"].as_array().unwrap();
    assert_eq!(overall[0]["name"], "Lisbon");
    assert_eq!(overall[0]["place"], 1);
    assert_eq!(overall[1]["place"], 2);
}

#[tokio::test]
async fn model_without_judgments_reports_no_data() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost", "Fun"]).await;
    let uri = format!("/models/{}/rankings", model["model_id"].as_str().unwrap());

    let (status, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert!(data.get("criteria_weights").is_none());
    assert!(data.get("overall_scores").is_none());
    assert_eq!(data["failures"]["criteria"]["code"], "NO_DATA");
    assert_eq!(data["alternative_weights"], json!({}));
}

#[tokio::test]
async fn disconnected_judgments_fail_only_their_set() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague", "Oslo"], &["Cost"]).await;
    let model_id = model["model_id"].as_str().unwrap();
    let c = ids(&model["criteria"]);
    let a = ids(&model["alternatives"]);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/models/{}/experts", model_id),
        Some(json!({
            "alternatives_comparisons": {
                c[0].as_str(): [comparison(&a[0], &a[1], 5.0)],
            },
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/models/{}/rankings", model_id), None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    // A single criterion needs no criteria judgments.
    assert_eq!(data["criteria_weights"][&c[0]].as_f64().unwrap(), 1.0);
    assert_eq!(data["failures"][&c[0]]["code"], "INSUFFICIENT_DATA");
    assert!(data.get("overall_scores").is_none());
}

#[tokio::test]
async fn equal_overall_scores_share_first_place() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost", "Fun"]).await;
    let model_id = model["model_id"].as_str().unwrap();
    let c = ids(&model["criteria"]);
    let a = ids(&model["alternatives"]);

    send(
        &app,
        "POST",
        &format!("/models/{}/experts", model_id),
        Some(json!({
            "criteria_comparisons": [comparison(&c[0], &c[1], 1.0)],
            "alternatives_comparisons": {
                c[0].as_str(): [comparison(&a[0], &a[1], 3.0)],
                c[1].as_str(): [comparison(&a[1], &a[0], 3.0)],
            },
        })),
    )
    .await;

    let (_, body) = send(&app, "GET", &format!("/models/{}/rankings", model_id), None).await;
    let overall = body["data"]["rankings"]["overall"].as_array().unwrap();

    assert_eq!(overall[0]["score"].as_f64().unwrap(), 50.0);
    assert_eq!(overall[0]["place"], 1);
    assert_eq!(overall[1]["place"], 1);
}

// =============================================================================
// Export / Import
// =============================================================================

#[tokio::test]
async fn export_then_import_restores_model() {
    let source = test_app();
    let model = create_model(&source, &["Lisbon", "Prague"], &["Cost"]).await;
    let model_id = model["model_id"].as_str().unwrap();
    let c = ids(&model["criteria"]);
    let a = ids(&model["alternatives"]);
    send(
        &source,
        "POST",
        &format!("/models/{}/experts", model_id),
        Some(json!({
            "alternatives_comparisons": { c[0].as_str(): [comparison(&a[0], &a[1], 7.0)] },
        })),
    )
    .await;

    let (status, exported) =
        send(&source, "GET", &format!("/models/{}/export", model_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let target = test_app();
    let (status, imported) =
        send(&target, "POST", "/models/import", Some(exported["data"].clone())).await;
    assert_eq!(status, StatusCode::CREATED, "{}", imported);
    assert_eq!(imported["data"]["model_id"], model_id);

    let (_, original) =
        send(&source, "GET", &format!("/models/{}/rankings", model_id), None).await;
    let (_, restored) =
        send(&target, "GET", &format!("/models/{}/rankings", model_id), None).await;
    assert_eq!(original, restored);
}

#[tokio::test]
async fn importing_existing_id_is_conflict() {
    let app = test_app();
    let model = create_model(&app, &["Lisbon", "Prague"], &["Cost"]).await;

    let (status, body) = send(&app, "POST", "/models/import", Some(model)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "MODEL_ALREADY_EXISTS");
}

#[tokio::test]
async fn import_with_repeated_expert_is_unprocessable() {
    let source = test_app();
    let model = create_model(&source, &["Lisbon", "Prague"], &["Cost"]).await;
    let model_id = model["model_id"].as_str().unwrap();
    let c = ids(&model["criteria"]);
    let a = ids(&model["alternatives"]);
    send(
        &source,
        "POST",
        &format!("/models/{}/experts", model_id),
        Some(json!({
            "alternatives_comparisons": { c[0].as_str(): [comparison(&a[0], &a[1], 3.0)] },
        })),
    )
    .await;
    let (_, exported) = send(&source, "GET", &format!("/models/{}/export", model_id), None).await;

    let mut document = exported["data"].clone();
    let input = document["expert_inputs"][0].clone();
    document["expert_inputs"] = json!([input.clone(), input]);

    let target = test_app();
    let (status, body) = send(&target, "POST", "/models/import", Some(document)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", body);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    let (_, listed) = send(&target, "GET", "/models", None).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn import_with_malformed_id_is_bad_request() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/models/import",
        Some(json!({
            "model_id": "not-a-uuid",
            "name": "Broken",
            "alternatives": [],
            "criteria": [],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
