// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account and authentication API tests.
//!
//! These tests verify that:
//! 1. Register and login issue working tokens
//! 2. Protected routes reject missing, malformed, expired and orphaned tokens
//! 3. Duplicate emails are rejected, including under concurrent registration

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

mod common;
use common::{create_test_app, register, send, sign_token};

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let (app, _) = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/register",
        None,
        Some(json!({"name": "Jane", "email": "jane@x.com", "password": "secret123"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["email"], "jane@x.com");
    assert_eq!(body["user"]["name"], "Jane");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password").is_none());
    let user_id = body["user"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({"email": "jane@x.com", "password": "secret123"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user_id.as_str());
    let token = body["token"].as_str().unwrap().to_string();

    let (status, me) = send(&app, "GET", "/api/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], user_id.as_str());
    assert_eq!(me["email"], "jane@x.com");
    assert!(me.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_token_works_immediately() {
    let (app, _) = create_test_app().await;
    let (token, user_id) = register(&app, "Jane", "jane@x.com", "secret123").await;

    let (status, meals) = send(&app, "GET", &format!("/api/meals/{}", user_id), Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(meals, json!([]));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (app, _) = create_test_app().await;
    register(&app, "Jane", "jane@x.com", "secret123").await;

    let (wrong_pw_status, wrong_pw) = send(
        &app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({"email": "jane@x.com", "password": "wrong"})),
    )
    .await;
    let (unknown_status, unknown) = send(
        &app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({"email": "nobody@x.com", "password": "secret123"})),
    )
    .await;

    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_pw, unknown);
    assert_eq!(wrong_pw["error"], "invalid_credentials");
    assert_eq!(wrong_pw["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let (app, state) = create_test_app().await;
    register(&app, "Jane", "jane@x.com", "secret123").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/users/register",
        None,
        Some(json!({"name": "Other", "email": "jane@x.com", "password": "different"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "duplicate_email");
    assert_eq!(body["message"], "Email already exists");
    assert_eq!(state.db.count_users_with_email("jane@x.com").await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_registrations_create_one_user() {
    let (app, state) = create_test_app().await;

    let attempts = (0..8).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            send(
                &app,
                "POST",
                "/api/users/register",
                None,
                Some(json!({"name": format!("Racer {}", i), "email": "race@x.com", "password": "pw"})),
            )
            .await
        })
    });

    let mut created = 0;
    for handle in attempts.collect::<Vec<_>>() {
        let (status, body) = handle.await.unwrap();
        match status {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => assert_eq!(body["error"], "duplicate_email"),
            other => panic!("unexpected status {}: {}", other, body),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(state.db.count_users_with_email("race@x.com").await.unwrap(), 1);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/api/users/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthenticated");
    assert_eq!(body["message"], "No token provided");
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let (app, _) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/api/users/me", Some("invalid.token.here"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    use axum::{
        body::Body,
        http::{header, Request},
    };
    use tower::ServiceExt;

    let (app, _) = create_test_app().await;
    let (token, _) = register(&app, "Jane", "jane@x.com", "secret123").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/me")
                .header(header::AUTHORIZATION, format!("Token {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let (app, state) = create_test_app().await;
    let (_, user_id) = register(&app, "Jane", "jane@x.com", "secret123").await;

    let now = Utc::now().timestamp();
    let expired = sign_token(&state, &user_id, now - 7200, now - 3600);

    let (status, body) = send(&app, "GET", &format!("/api/meals/{}", user_id), Some(&expired), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token expired");
}

#[tokio::test]
async fn test_token_for_deleted_user_rejected() {
    let (app, state) = create_test_app().await;
    let (token, user_id) = register(&app, "Jane", "jane@x.com", "secret123").await;

    state.db.delete_user(&user_id).await.unwrap();

    let (status, body) = send(&app, "GET", "/api/users/me", Some(&token), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_google_auth_creates_then_reuses_account() {
    let (app, _) = create_test_app().await;
    let request = json!({
        "email": "gina@x.com",
        "uid": "firebase-uid-1",
        "photoURL": "https://example.com/gina.png"
    });

    let (status, first) = send(&app, "POST", "/api/users/google-auth", None, Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["user"]["name"], "gina");
    assert_eq!(first["user"]["profilePicture"], "https://example.com/gina.png");

    let (status, second) = send(&app, "POST", "/api/users/google-auth", None, Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["user"]["id"], first["user"]["id"]);

    let token = second["token"].as_str().unwrap();
    let (status, _) = send(&app, "GET", "/api/users/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_google_account_cannot_password_login_with_uid() {
    let (app, _) = create_test_app().await;
    send(
        &app,
        "POST",
        "/api/users/google-auth",
        None,
        Some(json!({"name": "Gina", "email": "gina@x.com", "uid": "firebase-uid-1"})),
    )
    .await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({"email": "gina@x.com", "password": "firebase-uid-1"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_is_stateless() {
    let (app, _) = create_test_app().await;
    let (token, _) = register(&app, "Jane", "jane@x.com", "secret123").await;

    let (status, body) = send(&app, "POST", "/api/users/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out successfully");

    // Nothing is revoked server-side; the client is expected to drop the token.
    let (status, _) = send(&app, "GET", "/api/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}
