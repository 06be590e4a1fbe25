// tests/support/helpers.rs
use std::sync::Arc;

use article_service::application::{ports::time::Clock, services::ApplicationServices};
use article_service::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_service::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{FixedClock, InMemoryArticleRepo};

pub fn build_services<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> ApplicationServices
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    ApplicationServices::new(write, read, clock)
}

pub fn make_router_with<R>(repo: Arc<R>) -> axum::Router
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    let services = Arc::new(build_services(repo, Arc::new(FixedClock)));
    let origins = vec!["http://localhost:5173".to_string()];
    build_router(HttpState { services }, &origins)
}

/// インメモリリポジトリで構築したルーターと、そのリポジトリを返す
pub fn make_test_router() -> (axum::Router, Arc<InMemoryArticleRepo>) {
    let repo = Arc::new(InMemoryArticleRepo::new());
    (make_router_with(Arc::clone(&repo)), repo)
}

/// リクエストを1件送り、ステータスとJSONボディを返す
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value = serde_json::from_slice(&bytes).expect("expected a JSON body");
    (status, json)
}

/// エラーレスポンスの形式とステータスを検証する
pub fn assert_error_body(
    status: StatusCode,
    body: &Value,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    let err_field = body.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}

/// バリデーションエラーのフィールド名一覧
pub fn error_fields(body: &Value) -> Vec<String> {
    body.get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("field").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
