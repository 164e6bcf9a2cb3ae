// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Suggested meal/workout catalog and per-user seeding.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{CatalogMeal, CatalogWorkout, MealType};
use crate::services::{require_self, SeedReport};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Catalog browsing needs no account.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/catalog", get(get_catalog))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/catalog/{user_id}/seed", post(seed_catalog))
}

#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    #[serde(default, rename = "type")]
    pub meal_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CatalogResponse {
    pub meals: Vec<CatalogMeal>,
    pub workouts: Vec<CatalogWorkout>,
}

async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<CatalogResponse>> {
    let meal_type = params
        .meal_type
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(str::parse::<MealType>)
        .transpose()
        .map_err(AppError::Validation)?;

    Ok(Json(CatalogResponse {
        meals: state.catalog.meals(meal_type).into_iter().cloned().collect(),
        workouts: state.catalog.workouts().to_vec(),
    }))
}

/// Copy the catalog into the caller's own meals and workouts.
async fn seed_catalog(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<SeedReport>)> {
    require_self(&user, &user_id)?;

    let report = state.catalog.seed_user(&state.db, &user_id).await?;
    Ok((StatusCode::CREATED, Json(report)))
}
