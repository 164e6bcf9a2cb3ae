// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod catalog;
pub mod health;
pub mod meal;
pub mod summary;
pub mod user;
pub mod workout;

pub use catalog::{Catalog, CatalogMeal, CatalogWorkout};
pub use health::{HealthRecord, NewHealthRecord};
pub use meal::{Meal, MealType, NewMeal};
pub use summary::DailySummary;
pub use user::{NewUser, User, UserResponse};
pub use workout::{NewWorkout, Workout};
