// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout routes, scoped to the authenticated user.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{NewWorkout, Workout};
use crate::routes::extract::{numeric, text, timestamp, ValidatedJson};
use crate::routes::users::MessageResponse;
use crate::services::{require_owner, require_self};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/workouts/{id}",
        get(list_workouts).post(add_workout).delete(delete_workout),
    )
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddWorkoutRequest {
    #[serde(deserialize_with = "text::trimmed")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Minutes
    #[serde(deserialize_with = "numeric::int")]
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: i64,
    #[serde(default, deserialize_with = "numeric::opt_int")]
    #[validate(range(min = 0, message = "Calories must not be negative"))]
    pub calories: Option<i64>,
    #[serde(default, deserialize_with = "timestamp::opt_datetime")]
    pub date: Option<DateTime<Utc>>,
}

impl From<AddWorkoutRequest> for NewWorkout {
    fn from(req: AddWorkoutRequest) -> Self {
        NewWorkout {
            name: req.name,
            description: req.description,
            duration: req.duration,
            calories: req.calories,
            date: req.date,
        }
    }
}

async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Workout>>> {
    require_self(&user, &user_id)?;

    Ok(Json(state.db.list_workouts_for_user(&user_id).await?))
}

async fn add_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
    ValidatedJson(req): ValidatedJson<AddWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>)> {
    require_self(&user, &user_id)?;

    let workout = state.db.create_workout(&user_id, req.into()).await?;
    tracing::info!(user_id = %user_id, workout_id = %workout.id, "Workout added");
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(workout_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let workout = require_owner(&user, state.db.get_workout(&workout_id).await?)?;

    state.db.delete_workout(&workout.id).await?;
    tracing::info!(user_id = %user.id(), workout_id = %workout.id, "Workout deleted");
    Ok(MessageResponse::new("Workout deleted successfully"))
}
