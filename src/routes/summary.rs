// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily nutrition/fitness summary.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::DailySummary;
use crate::services::require_self;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::{Days, NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/summary/{user_id}", get(get_summary))
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// `YYYY-MM-DD`; today (UTC) when absent.
    #[serde(default)]
    pub date: Option<String>,
}

fn parse_day(raw: Option<&str>) -> Result<NaiveDate> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Utc::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
        }),
    }
}

/// Totals over one UTC day of the caller's meals and workouts.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<DailySummary>> {
    require_self(&user, &user_id)?;

    let day = parse_day(params.date.as_deref())?;
    let start = day
        .and_hms_opt(0, 0, 0)
        .map(|t| t.and_utc())
        .ok_or_else(|| AppError::Validation("Invalid date".to_string()))?;
    let end = start
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::Validation("Invalid date".to_string()))?;

    let meals = state.db.list_meals_between(&user_id, start, end).await?;
    let workouts = state.db.list_workouts_between(&user_id, start, end).await?;

    Ok(Json(DailySummary::from_records(day, &meals, &workouts)))
}
