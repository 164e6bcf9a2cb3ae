// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal storage, always parameterized by owner.

use super::Db;
use crate::error::AppError;
use crate::models::{Meal, NewMeal};
use chrono::{DateTime, Utc};

impl Db {
    // ─── Meal Operations ─────────────────────────────────────────

    /// All meals for a user, newest first. Empty when the user has none.
    pub async fn list_meals_for_user(&self, user_id: &str) -> Result<Vec<Meal>, AppError> {
        let meals = sqlx::query_as::<_, Meal>(
            "SELECT * FROM meals WHERE user_id = ? ORDER BY date DESC, rowid DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(meals)
    }

    /// Meals for a user with `start <= date < end`, newest first.
    pub async fn list_meals_between(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Meal>, AppError> {
        let meals = sqlx::query_as::<_, Meal>(
            r#"
            SELECT * FROM meals
            WHERE user_id = ? AND date >= ? AND date < ?
            ORDER BY date DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(meals)
    }

    /// Get a meal by ID.
    pub async fn get_meal(&self, id: &str) -> Result<Option<Meal>, AppError> {
        let meal = sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(meal)
    }

    /// Whether the user already has a meal with this exact name.
    pub async fn meal_name_exists(&self, user_id: &str, name: &str) -> Result<bool, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM meals WHERE user_id = ? AND name = ?")
                .bind(user_id)
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    /// Store a new meal for `user_id`. A missing date defaults to now.
    pub async fn create_meal(&self, user_id: &str, new_meal: NewMeal) -> Result<Meal, AppError> {
        let now = Utc::now();
        let meal = Meal {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_meal.name,
            description: new_meal.description,
            calories: new_meal.calories,
            protein: new_meal.protein,
            carbs: new_meal.carbs,
            fat: new_meal.fat,
            meal_type: new_meal.meal_type,
            image: new_meal.image,
            date: new_meal.date.unwrap_or(now),
            created_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO meals
                (id, user_id, name, description, calories, protein, carbs, fat,
                 meal_type, image, date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&meal.id)
        .bind(&meal.user_id)
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.calories)
        .bind(meal.protein)
        .bind(meal.carbs)
        .bind(meal.fat)
        .bind(meal.meal_type)
        .bind(&meal.image)
        .bind(meal.date)
        .bind(meal.created_at)
        .execute(&self.pool)
        .await?;

        Ok(meal)
    }

    /// Physically delete a meal. `NotFound` if the ID does not resolve.
    pub async fn delete_meal(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM meals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        super::expect_deleted(result.rows_affected(), "Meal")
    }
}
