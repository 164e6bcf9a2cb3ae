// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use healthtrack_api::config::Config;
use healthtrack_api::db::Db;
use healthtrack_api::routes::create_router;
use healthtrack_api::services::{CatalogService, Claims};
use healthtrack_api::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app over a private in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(Config::test_default(), CatalogService::default()).await
}

/// Same as [`create_test_app`] but with the bundled meal/workout catalog.
#[allow(dead_code)]
pub async fn create_test_app_with_catalog() -> (Router, Arc<AppState>) {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
    let catalog = CatalogService::load_from_file(path).expect("Failed to load catalog");
    create_test_app_with(Config::test_default(), catalog).await
}

#[allow(dead_code)]
pub async fn create_test_app_with(
    config: Config,
    catalog: CatalogService,
) -> (Router, Arc<AppState>) {
    let db = Db::in_memory()
        .await
        .expect("Failed to open in-memory database");
    let state = Arc::new(AppState::new(config, db, catalog));

    (create_router(state.clone()), state)
}

/// Send one request through the router and decode the JSON body.
///
/// Non-JSON bodies come back as `Value::Null`.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Register a user and return `(token, user_id)`.
#[allow(dead_code)]
pub async fn register(app: &Router, name: &str, email: &str, password: &str) -> (String, String) {
    let (status, body) = send(
        app,
        "POST",
        "/api/users/register",
        None,
        Some(serde_json::json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_str().unwrap().to_string(),
    )
}

/// Sign a token with explicit timestamps (for expiry tests).
#[allow(dead_code)]
pub fn sign_token(state: &AppState, user_id: &str, iat: i64, exp: i64) -> String {
    state
        .tokens
        .sign(&Claims {
            sub: user_id.to_string(),
            email: "test@example.com".to_string(),
            iat,
            exp,
            jti: uuid::Uuid::new_v4().to_string(),
        })
        .unwrap()
}
