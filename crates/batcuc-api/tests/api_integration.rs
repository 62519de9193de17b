//! HTTP-level tests against the assembled router.

use axum_test::TestServer;
use batcuc_api::create_router;
use serde_json::{json, Value};

fn server() -> TestServer {
    TestServer::new(create_router()).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let server = server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn phone_analysis_returns_full_reading() {
    let server = server();
    let response = server
        .post("/api/analysis/phone")
        .json(&json!({ "phoneNumber": "0912345678" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let analysis = &body["analysis"];
    assert_eq!(analysis["inputDigits"], "0912345678");
    assert_eq!(analysis["normalizedDigits"], "912345678");
    assert!(analysis["starSequence"].as_array().unwrap().len() > 0);
    let score = analysis["qualityScore"].as_u64().unwrap();
    assert!(score <= 100);
}

#[tokio::test]
async fn phone_analysis_accepts_user_context() {
    let server = server();
    let response = server
        .post("/api/analysis/phone")
        .json(&json!({
            "phoneNumber": "0912345678",
            "context": { "ageBracket": "OVER_60", "usageDuration": "OVER_5" }
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body["analysis"]["weighted"]["responseLevel"].is_string());
}

#[tokio::test]
async fn digit_free_phone_number_is_a_bad_request() {
    let server = server();
    let response = server
        .post("/api/analysis/phone")
        .json(&json!({ "phoneNumber": "không có số" }))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn empty_phone_number_is_a_bad_request() {
    let server = server();
    let response = server
        .post("/api/analysis/phone")
        .json(&json!({ "phoneNumber": "  " }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn six_digit_analysis_returns_summary() {
    let server = server();
    let response = server
        .post("/api/analysis/six-digit")
        .json(&json!({ "number": "001204012345" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let analysis = &body["analysis"];
    assert_eq!(analysis["lastSixDigits"], "012345");
    assert!(analysis["overallSummary"].as_str().unwrap().len() > 0);
}

#[tokio::test]
async fn six_digit_analysis_rejects_letters() {
    let server = server();
    let response = server
        .post("/api/analysis/six-digit")
        .json(&json!({ "number": "12ab56" }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn compatibility_scores_the_requested_purpose() {
    let server = server();
    let response = server
        .post("/api/analysis/compatibility")
        .json(&json!({ "phoneNumber": "0914141414", "purpose": "health" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["purpose"], "health");
    let score = body["compatibility"]["score"].as_u64().unwrap();
    assert!(score <= 100);
    assert!(body["compatibility"]["level"].is_string());
}
