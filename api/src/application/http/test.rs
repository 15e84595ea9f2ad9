use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

const COLA_ANALYSIS: &str = r#"```json
{
  "productName": "Cola Classic",
  "score": 23.6,
  "ingredients": [
    {"name": "Carbonated Water", "status": "good", "reason": "Just water"},
    {"name": "High Fructose Corn Syrup", "status": "bad", "reason": "Sugar bomb"},
    {"name": "Caramel Color", "status": "bad", "reason": "Dye with baggage"}
  ],
  "summary": "Sugar water with a tan.",
  "roastComment": "Your pancreas filed a complaint."
}
```"#;

/// Starts a chat completions endpoint that answers every call with `reply`.
async fn spawn_llm_stub(status: StatusCode, reply: Value) -> String {
    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let reply = reply.clone();
            async move { (status, Json(reply)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

async fn test_server(llm_base_url: &str, api_key: &str) -> TestServer {
    let args = Args::parse_from([
        "label-slayer",
        "--history-backend",
        "memory",
        "--llm-base-url",
        llm_base_url,
        &format!("--openai-api-key={}", api_key),
        "--product-lookup-base-url",
        "http://127.0.0.1:9",
    ]);

    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

#[tokio::test]
async fn test_health_live() {
    let server = test_server("http://127.0.0.1:9", "sk-test").await;

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_analyze_text_returns_analysis_with_insights() {
    let llm = spawn_llm_stub(StatusCode::OK, completion(COLA_ANALYSIS)).await;
    let server = test_server(&llm, "sk-test").await;

    let response = server
        .post("/analysis/text")
        .json(&json!({
            "product_name": "Cola Classic",
            "ingredients": "carbonated water, high fructose corn syrup, caramel color",
            "save_to_history": false
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["productName"], "Cola Classic");
    assert_eq!(body["data"]["score"], 24);
    assert_eq!(body["data"]["roastComment"], "Your pancreas filed a complaint.");
    assert_eq!(body["insights"]["tally"]["bad"], 2);
    assert_eq!(body["insights"]["tally"]["good"], 1);
    assert!(body["history_id"].is_null());
}

#[tokio::test]
async fn test_analyze_text_falls_back_on_unusable_reply() {
    let llm = spawn_llm_stub(StatusCode::OK, completion("Sorry, I cannot help with that.")).await;
    let server = test_server(&llm, "sk-test").await;

    let response = server
        .post("/analysis/text")
        .json(&json!({
            "product_name": "Mystery Bar",
            "ingredients": "oats, honey",
            "save_to_history": false
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["productName"], "Mystery Bar");
    assert_eq!(body["data"]["score"], 0);
    assert_eq!(body["data"]["ingredients"], json!([]));
}

#[tokio::test]
async fn test_analysis_is_saved_and_managed_through_history() {
    let llm = spawn_llm_stub(StatusCode::OK, completion(COLA_ANALYSIS)).await;
    let server = test_server(&llm, "sk-test").await;

    let analyzed = server
        .post("/analysis/text")
        .json(&json!({
            "product_name": "Cola Classic",
            "ingredients": "carbonated water, high fructose corn syrup, caramel color"
        }))
        .await;
    analyzed.assert_status_ok();
    let id = analyzed.json::<Value>()["history_id"]
        .as_str()
        .unwrap()
        .to_string();

    let history = server.get("/history").await;
    history.assert_status_ok();
    let entries = history.json::<Value>()["data"].as_array().unwrap().clone();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], id.as_str());
    assert_eq!(entries[0]["productName"], "Cola Classic");
    assert_eq!(entries[0]["relative_time"], "Just now");
    assert_eq!(entries[0]["emoji"], "🥤");

    let item = server.get(&format!("/history/{}", id)).await;
    item.assert_status_ok();
    assert_eq!(item.json::<Value>()["data"]["score"], 24);

    let deleted = server.delete(&format!("/history/{}", id)).await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>()["deleted"], true);

    let missing = server.get(&format!("/history/{}", id)).await;
    missing.assert_status(StatusCode::NOT_FOUND);

    let deleted_again = server.delete(&format!("/history/{}", id)).await;
    deleted_again.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_and_clear_history() {
    let server = test_server("http://127.0.0.1:9", "sk-test").await;

    let saved = server
        .post("/history")
        .json(&json!({
            "analysis": {
                "productName": "Greek Yogurt",
                "score": 88,
                "ingredients": [{"name": "Milk", "status": "good"}],
                "summary": "Solid.",
                "roastComment": "Boringly healthy."
            },
            "photo_uri": "https://images.example.com/yogurt.jpg"
        }))
        .await;
    saved.assert_status(StatusCode::CREATED);
    let saved = saved.json::<Value>();
    assert_eq!(saved["photoUri"], "https://images.example.com/yogurt.jpg");
    assert_eq!(saved["emoji"], "🥛");

    let cleared = server.delete("/history").await;
    cleared.assert_status_ok();

    let history = server.get("/history").await;
    assert_eq!(history.json::<Value>()["data"], json!([]));
}

#[tokio::test]
async fn test_compute_insights() {
    let server = test_server("http://127.0.0.1:9", "sk-test").await;

    let response = server
        .post("/insights")
        .json(&json!({
            "productName": "Trail Mix",
            "score": 72,
            "ingredients": [
                {"name": "Almonds", "status": "good", "reason": ""},
                {"name": "Sugar", "status": "bad", "reason": ""}
            ],
            "summary": "",
            "roastComment": ""
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["score"], 72);
    assert_eq!(body["data"]["tally"]["good"], 1);
    assert_eq!(body["data"]["ingredients"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let server = test_server("http://127.0.0.1:9", "sk-test").await;

    let response = server
        .post("/analysis/text")
        .json(&json!({"product_name": "", "ingredients": "water"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
}

#[tokio::test]
async fn test_missing_api_key_is_configuration_error() {
    let server = test_server("http://127.0.0.1:9", "").await;

    let response = server
        .post("/analysis/image")
        .json(&json!({"image_uri": "data:image/png;base64,aGVsbG8="}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["code"], "E_CONFIGURATION");
}

#[tokio::test]
async fn test_malformed_data_uri_is_image_error() {
    let server = test_server("http://127.0.0.1:9", "sk-test").await;

    let response = server
        .post("/analysis/image")
        .json(&json!({"image_uri": "data:image/png;base64", "save_to_history": false}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_IMAGE_PROCESSING");
    assert_eq!(
        body["message"],
        "Failed to process image: Invalid data URL format"
    );
}

#[tokio::test]
async fn test_upstream_rejection_is_bad_gateway() {
    let llm = spawn_llm_stub(
        StatusCode::UNAUTHORIZED,
        json!({"error": {"message": "Incorrect API key provided"}}),
    )
    .await;
    let server = test_server(&llm, "sk-test").await;

    let response = server
        .post("/analysis/image")
        .json(&json!({"image_uri": "data:image/png;base64,aGVsbG8=", "save_to_history": false}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_UPSTREAM");
    assert_eq!(body["message"], "Incorrect API key provided");
}

#[tokio::test]
async fn test_out_of_range_records_are_rejected() {
    let server = test_server("http://127.0.0.1:9", "sk-test").await;
    let invalid = json!({"productName": "", "score": 200, "ingredients": []});

    let insights = server.post("/insights").json(&invalid).await;
    insights.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(insights.json::<Value>()["code"], "E_BAD_REQUEST");

    let saved = server
        .post("/history")
        .json(&json!({
            "analysis": {"productName": "Soda", "score": 101, "ingredients": []}
        }))
        .await;
    saved.assert_status(StatusCode::BAD_REQUEST);

    let history = server.get("/history").await;
    assert_eq!(history.json::<Value>()["data"], json!([]));
}

#[tokio::test]
async fn test_file_locators_are_rejected_without_image_root() {
    let llm = spawn_llm_stub(StatusCode::OK, completion(COLA_ANALYSIS)).await;
    let server = test_server(&llm, "sk-test").await;

    for locator in ["/etc/hosts", "file:///etc/passwd"] {
        let response = server
            .post("/analysis/image")
            .json(&json!({"image_uri": locator}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "E_BAD_REQUEST");
    }

    let history = server.get("/history").await;
    assert_eq!(history.json::<Value>()["data"], json!([]));
}
