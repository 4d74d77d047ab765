use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DbErr;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};

mod create;
mod delete;
mod get;
mod malformed_body;

/// Builds the API router over an in-memory database migrated with `Migrator::up`.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().build().await.unwrap();
    Migrator::up(test.db.as_ref().unwrap(), None).await.unwrap();
    let app = router::router().with_state(AppState::new(test.db.clone().unwrap()));

    (test, app)
}

/// Sends a request with an optional JSON body and returns status and parsed body.
async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    into_parts(app.oneshot(request).await.unwrap()).await
}

/// Sends a raw body with the given content type, bypassing JSON encoding.
async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    into_parts(app.oneshot(request).await.unwrap()).await
}

async fn into_parts(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

fn payload(student_code: &str, email: &str) -> Value {
    json!({
        "student_code": student_code,
        "first_name": "Somchai",
        "last_name": "Jaidee",
        "email": email,
        "major": "CS"
    })
}
