// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health measurement routes (weight, height, blood pressure, heart rate).

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{HealthRecord, NewHealthRecord};
use crate::routes::extract::{numeric, timestamp, ValidatedJson};
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
use validator::{Validate, ValidationError};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/health/{id}",
        get(list_records).post(add_record).delete(delete_record),
    )
}

/// Accepts `systolic/diastolic`, e.g. `120/80`.
fn validate_blood_pressure(value: &str) -> std::result::Result<(), ValidationError> {
    let parsed = value.split_once('/').and_then(|(sys, dia)| {
        Some((sys.trim().parse::<u32>().ok()?, dia.trim().parse::<u32>().ok()?))
    });

    match parsed {
        Some((sys, dia)) if dia > 0 && sys > dia && sys <= 300 => Ok(()),
        _ => Err(ValidationError::new("blood_pressure")
            .with_message("Blood pressure must look like 120/80".into())),
    }
}

fn validate_has_measurement(
    req: &AddHealthRecordRequest,
) -> std::result::Result<(), ValidationError> {
    let blank_bp = req
        .blood_pressure
        .as_deref()
        .map_or(true, |bp| bp.trim().is_empty());

    if req.weight.is_none() && req.height.is_none() && blank_bp && req.heart_rate.is_none() {
        return Err(ValidationError::new("empty_record")
            .with_message("At least one measurement is required".into()));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_has_measurement"))]
pub struct AddHealthRecordRequest {
    /// Kilograms
    #[serde(default, deserialize_with = "numeric::opt_float")]
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    pub weight: Option<f64>,
    /// Centimeters
    #[serde(default, deserialize_with = "numeric::opt_float")]
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    pub height: Option<f64>,
    #[serde(default)]
    #[validate(custom(function = "validate_blood_pressure"))]
    pub blood_pressure: Option<String>,
    #[serde(default, deserialize_with = "numeric::opt_int")]
    #[validate(range(min = 1, message = "Heart rate must be positive"))]
    pub heart_rate: Option<i64>,
    #[serde(default, deserialize_with = "timestamp::opt_datetime")]
    pub date: Option<DateTime<Utc>>,
}

impl From<AddHealthRecordRequest> for NewHealthRecord {
    fn from(req: AddHealthRecordRequest) -> Self {
        NewHealthRecord {
            weight: req.weight,
            height: req.height,
            blood_pressure: req.blood_pressure.map(|bp| bp.replace(' ', "")),
            heart_rate: req.heart_rate,
            date: req.date,
        }
    }
}

async fn list_records(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<HealthRecord>>> {
    require_self(&user, &user_id)?;

    Ok(Json(state.db.list_health_records_for_user(&user_id).await?))
}

async fn add_record(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<String>,
    ValidatedJson(req): ValidatedJson<AddHealthRecordRequest>,
) -> Result<(StatusCode, Json<HealthRecord>)> {
    require_self(&user, &user_id)?;

    let record = state.db.create_health_record(&user_id, req.into()).await?;
    tracing::info!(user_id = %user_id, record_id = %record.id, "Health record added");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn delete_record(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(record_id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let record = require_owner(&user, state.db.get_health_record(&record_id).await?)?;

    state.db.delete_health_record(&record.id).await?;
    Ok(MessageResponse::new("Health record deleted successfully"))
}
