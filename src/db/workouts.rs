// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout storage, always parameterized by owner.

use super::Db;
use crate::error::AppError;
use crate::models::{NewWorkout, Workout};
use chrono::{DateTime, Utc};

impl Db {
    // ─── Workout Operations ──────────────────────────────────────

    /// All workouts for a user, newest first.
    pub async fn list_workouts_for_user(&self, user_id: &str) -> Result<Vec<Workout>, AppError> {
        let workouts = sqlx::query_as::<_, Workout>(
            "SELECT * FROM workouts WHERE user_id = ? ORDER BY date DESC, rowid DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(workouts)
    }

    /// Workouts for a user with `start <= date < end`, newest first.
    pub async fn list_workouts_between(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Workout>, AppError> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT * FROM workouts
            WHERE user_id = ? AND date >= ? AND date < ?
            ORDER BY date DESC, rowid DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(workouts)
    }

    /// Get a workout by ID.
    pub async fn get_workout(&self, id: &str) -> Result<Option<Workout>, AppError> {
        let workout = sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(workout)
    }

    pub async fn workout_name_exists(&self, user_id: &str, name: &str) -> Result<bool, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM workouts WHERE user_id = ? AND name = ?")
                .bind(user_id)
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(count > 0)
    }

    /// Store a new workout for `user_id`. A missing date defaults to now.
    pub async fn create_workout(
        &self,
        user_id: &str,
        new_workout: NewWorkout,
    ) -> Result<Workout, AppError> {
        let now = Utc::now();
        let workout = Workout {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_workout.name,
            description: new_workout.description,
            duration: new_workout.duration,
            calories: new_workout.calories,
            date: new_workout.date.unwrap_or(now),
            created_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO workouts
                (id, user_id, name, description, duration, calories, date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&workout.id)
        .bind(&workout.user_id)
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(workout.duration)
        .bind(workout.calories)
        .bind(workout.date)
        .bind(workout.created_at)
        .execute(&self.pool)
        .await?;

        Ok(workout)
    }

    /// Physically delete a workout. `NotFound` if the ID does not resolve.
    pub async fn delete_workout(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        super::expect_deleted(result.rows_affected(), "Workout")
    }
}
