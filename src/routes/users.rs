// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account routes: registration, login, external sign-in and current user.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{NewUser, User, UserResponse};
use crate::routes::extract::{text, ValidatedJson};
use crate::services::{hash_password, verify_password};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Routes that do not require a token.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/users/google-auth", post(google_auth))
        .route("/api/users/logout", post(logout))
}

/// Routes behind `require_auth`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users/me", get(get_me))
}

// ─── Requests ────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "text::trimmed")]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(deserialize_with = "text::trimmed")]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Identity asserted by the frontend after an external (Google) sign-in.
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleAuthRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "text::trimmed")]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Email and uid are required"))]
    pub uid: String,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

// ─── Responses ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

// ─── Handlers ────────────────────────────────────────────────

/// Local part of an email, used when no display name is given.
fn default_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn hash_off_thread(secret: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&secret))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))
}

fn auth_response(state: &AppState, user: User, message: Option<&str>) -> Result<AuthResponse> {
    let token = state
        .tokens
        .issue(&user.id, &user.email)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;

    Ok(AuthResponse {
        message: message.map(str::to_string),
        token,
        user: user.into(),
    })
}

/// Create an account and sign it in.
async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let email = req.email;

    // Advisory; the UNIQUE constraint decides concurrent registrations.
    if state.db.get_user_by_email(&email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_off_thread(req.password).await?;
    let name = req
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| default_name(&email));

    let user = state
        .db
        .create_user(NewUser {
            email,
            name,
            password_hash,
            profile_picture: None,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    let body = auth_response(&state, user, Some("User registered successfully"))?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// Exchange email and password for a token.
async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let Some(user) = state.db.get_user_by_email(&req.email).await? else {
        tracing::debug!("Login for unknown email");
        return Err(AppError::InvalidCredentials);
    };

    let password = req.password;
    let hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Verify task failed: {}", e)))?
        .unwrap_or_else(|e| {
            tracing::warn!(user_id = %user.id, error = %e, "Stored password hash unusable");
            false
        });

    if !valid {
        tracing::debug!(user_id = %user.id, "Login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(auth_response(&state, user, None)?))
}

/// Sign in with an identity asserted by the frontend's Google sign-in.
///
/// The assertion is trusted as-is. A first sign-in creates the account with
/// an unusable random password, so it can never log in with a password.
async fn google_auth(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<GoogleAuthRequest>,
) -> Result<Json<AuthResponse>> {
    let email = req.email;

    let user = match state.db.get_user_by_email(&email).await? {
        Some(user) => user,
        None => {
            let password_hash = hash_off_thread(uuid::Uuid::new_v4().to_string()).await?;
            let name = req
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| default_name(&email));

            let user = state
                .db
                .create_user(NewUser {
                    email,
                    name,
                    password_hash,
                    profile_picture: req.photo_url.filter(|p| !p.is_empty()),
                })
                .await?;
            tracing::info!(user_id = %user.id, "User created from external sign-in");
            user
        }
    };

    Ok(Json(auth_response(&state, user, None)?))
}

/// Tokens are stateless; the client discards its copy.
async fn logout() -> Json<MessageResponse> {
    MessageResponse::new("Logged out successfully")
}

/// Current user profile (no password hash).
async fn get_me(Extension(user): Extension<AuthUser>) -> Json<UserResponse> {
    Json(user.0.into())
}
