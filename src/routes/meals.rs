// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal routes, scoped to the authenticated user.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Meal, MealType, NewMeal};
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
    // One pattern: list/add take a user ID, delete takes a meal ID.
    Router::new().route(
        "/api/meals/{id}",
        get(list_meals).post(add_meal).delete(delete_meal),
    )
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddMealRequest {
    #[serde(deserialize_with = "text::trimmed")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "numeric::int")]
    #[validate(range(min = 0, message = "Calories must not be negative"))]
    pub calories: i64,
    #[serde(default, deserialize_with = "numeric::opt_float")]
    #[validate(range(min = 0.0, message = "Protein must not be negative"))]
    pub protein: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_float")]
    #[validate(range(min = 0.0, message = "Carbs must not be negative"))]
    pub carbs: Option<f64>,
    #[serde(default, deserialize_with = "numeric::opt_float")]
    #[validate(range(min = 0.0, message = "Fat must not be negative"))]
    pub fat: Option<f64>,
    #[serde(default, rename = "type")]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "timestamp::opt_datetime")]
    pub date: Option<DateTime<Utc>>,
}

impl From<AddMealRequest> for NewMeal {
    fn from(req: AddMealRequest) -> Self {
        NewMeal {
            name: req.name,
            description: req.description,
            calories: req.calories,
            protein: req.protein,
            carbs: req.carbs,
            fat: req.fat,
            meal_type: req.meal_type,
            image: req.image,
            date: req.date,
        }
    }
}

/// The caller's meals, newest first.
async fn list_meals(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Meal>>> {
    require_self(&user, &user_id)?;

    let meals = state.db.list_meals_for_user(&user_id).await?;
    tracing::debug!(user_id = %user_id, count = meals.len(), "Listed meals");
    Ok(Json(meals))
}

async fn add_meal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
    ValidatedJson(req): ValidatedJson<AddMealRequest>,
) -> Result<(StatusCode, Json<Meal>)> {
    require_self(&user, &user_id)?;

    let meal = state.db.create_meal(&user_id, req.into()).await?;
    tracing::info!(user_id = %user_id, meal_id = %meal.id, "Meal added");
    Ok((StatusCode::CREATED, Json(meal)))
}

async fn delete_meal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(meal_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let meal = require_owner(&user, state.db.get_meal(&meal_id).await?)?;

    state.db.delete_meal(&meal.id).await?;
    tracing::info!(user_id = %user.id(), meal_id = %meal.id, "Meal deleted");
    Ok(MessageResponse::new("Meal deleted successfully"))
}
