// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog loading and per-user seeding.

use crate::db::Db;
use crate::error::AppError;
use crate::models::{Catalog, CatalogMeal, CatalogWorkout, MealType};
use serde::Serialize;
use std::fs;
use std::path::Path;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Service holding the read-only meal/workout catalog.
#[derive(Default, Clone)]
pub struct CatalogService {
    catalog: Catalog,
}

/// Outcome of copying the catalog into a user's records.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeedReport {
    pub meals_created: u32,
    pub meals_skipped: u32,
    pub workouts_created: u32,
    pub workouts_skipped: u32,
}

impl CatalogService {
    /// Load the catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json_data)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        if let Some(meal) = catalog.meals.iter().find(|m| m.calories < 0) {
            return Err(CatalogError::InvalidEntry(meal.name.clone()));
        }
        if let Some(workout) = catalog.workouts.iter().find(|w| w.duration <= 0) {
            return Err(CatalogError::InvalidEntry(workout.name.clone()));
        }

        tracing::info!(
            meals = catalog.meals.len(),
            workouts = catalog.workouts.len(),
            "Loaded catalog"
        );
        Ok(Self { catalog })
    }

    /// Catalog meals, optionally only one meal type.
    pub fn meals(&self, meal_type: Option<MealType>) -> Vec<&CatalogMeal> {
        self.catalog
            .meals
            .iter()
            .filter(|m| meal_type.map_or(true, |t| m.meal_type == t))
            .collect()
    }

    pub fn workouts(&self) -> &[CatalogWorkout] {
        &self.catalog.workouts
    }

    /// Copy every catalog entry into the user's meals and workouts.
    ///
    /// Entries whose name the user already has are skipped, so seeding twice
    /// is a no-op.
    pub async fn seed_user(&self, db: &Db, user_id: &str) -> Result<SeedReport, AppError> {
        let mut report = SeedReport::default();

        for meal in &self.catalog.meals {
            if db.meal_name_exists(user_id, &meal.name).await? {
                report.meals_skipped += 1;
                continue;
            }
            db.create_meal(user_id, meal.to_new_meal()).await?;
            report.meals_created += 1;
        }

        for workout in &self.catalog.workouts {
            if db.workout_name_exists(user_id, &workout.name).await? {
                report.workouts_skipped += 1;
                continue;
            }
            db.create_workout(user_id, workout.to_new_workout()).await?;
            report.workouts_created += 1;
        }

        tracing::info!(
            user_id = %user_id,
            meals_created = report.meals_created,
            workouts_created = report.workouts_created,
            "Seeded catalog for user"
        );
        Ok(report)
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),

    #[error("Invalid catalog entry: {0}")]
    InvalidEntry(String),
}
