// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Suggested meals and workouts offered to every user.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::meal::{MealType, NewMeal};
use crate::models::workout::NewWorkout;

/// A catalog meal (e.g., "Greek Yogurt Bowl").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CatalogMeal {
    pub name: String,
    pub description: String,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Public image path, e.g. "/images/meals/meal-1.jpg"
    pub image: String,
}

impl CatalogMeal {
    /// Copy into a user-owned meal dated now.
    pub fn to_new_meal(&self) -> NewMeal {
        NewMeal {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            calories: self.calories,
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
            meal_type: Some(self.meal_type),
            image: Some(self.image.clone()),
            date: None,
        }
    }
}

/// A catalog workout (e.g., "Yoga").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CatalogWorkout {
    pub name: String,
    pub description: String,
    /// Minutes
    pub duration: i64,
    pub calories: Option<i64>,
}

impl CatalogWorkout {
    pub fn to_new_workout(&self) -> NewWorkout {
        NewWorkout {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            duration: self.duration,
            calories: self.calories,
            date: None,
        }
    }
}

/// On-disk catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Catalog {
    #[serde(default)]
    pub meals: Vec<CatalogMeal>,
    #[serde(default)]
    pub workouts: Vec<CatalogWorkout>,
}
