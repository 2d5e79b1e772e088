use crate::router;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn mean_of_one_two_three() {
    let (status, content_type, body) = get("/mean?nums=1,2,3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"operation":"mean","value":2}"#);
}

#[tokio::test]
async fn median_of_even_count() {
    let (status, _, body) = get("/median?nums=1,2,3,4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"operation":"median","value":2.5}"#);
}

#[tokio::test]
async fn mode_with_tie() {
    let (status, _, body) = get("/mode?nums=1,1,2,2,3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"operation":"mode","value":[1,2]}"#);
}

#[tokio::test]
async fn mode_with_single_winner() {
    let (_, _, body) = get("/mode?nums=4,1.5,1.5").await;
    assert_eq!(body, r#"{"operation":"mode","value":1.5}"#);
}

#[tokio::test]
async fn missing_nums_is_bad_request() {
    for uri in ["/mean", "/median?", "/mode?nums=", "/mean?other=1"] {
        let (status, content_type, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"error":"nums are required"}"#, "{}", uri);
    }
}

#[tokio::test]
async fn invalid_token_is_bad_request() {
    let (status, _, body) = get("/mean?nums=1,a,3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"a is not a number"}"#);

    let (status, _, body) = get("/median?nums=1,,3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":" is not a number"}"#);
}

#[tokio::test]
async fn encoded_query_is_decoded() {
    let (status, _, body) = get("/mean?nums=1%2C%202,3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"operation":"mean","value":2}"#);
}

#[tokio::test]
async fn duplicated_nums_is_json_bad_request() {
    let (status, content_type, body) = get("/mode?nums=1&nums=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let body: Value = serde_json::from_str(&body).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_reports_version() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], json!("OK"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(body["operations"], json!(["mean", "median", "mode"]));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _, _) = get("/variance?nums=1,2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
