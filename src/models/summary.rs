//! Daily nutrition/fitness aggregates for dashboard queries.
//!
//! Computed on demand from the meal and workout tables for one UTC day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Meal, Workout};

/// Totals for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailySummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,

    // ─── Nutrition ───────────────────────────────────────────────
    pub calories_consumed: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal_count: u32,

    // ─── Fitness ─────────────────────────────────────────────────
    pub calories_burned: i64,
    pub workout_minutes: i64,
    pub workout_count: u32,

    /// Consumed minus burned
    pub net_calories: i64,
}

impl DailySummary {
    /// Fold a day's meals and workouts into totals.
    ///
    /// Callers are responsible for passing records from `date` only.
    pub fn from_records(date: NaiveDate, meals: &[Meal], workouts: &[Workout]) -> Self {
        let calories_consumed = meals.iter().map(|m| m.calories).sum();
        let calories_burned = workouts.iter().filter_map(|w| w.calories).sum();

        Self {
            date,
            calories_consumed,
            protein: meals.iter().filter_map(|m| m.protein).sum(),
            carbs: meals.iter().filter_map(|m| m.carbs).sum(),
            fat: meals.iter().filter_map(|m| m.fat).sum(),
            meal_count: meals.len() as u32,
            calories_burned,
            workout_minutes: workouts.iter().map(|w| w.duration).sum(),
            workout_count: workouts.len() as u32,
            net_calories: calories_consumed - calories_burned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn meal(calories: i64, protein: Option<f64>) -> Meal {
        Meal {
            id: "m".to_string(),
            user_id: "u".to_string(),
            name: "Meal".to_string(),
            description: None,
            calories,
            protein,
            carbs: Some(10.0),
            fat: None,
            meal_type: None,
            image: None,
            date: Utc::now(),
            created_at: Utc::now(),
        }
    }

    fn workout(duration: i64, calories: Option<i64>) -> Workout {
        Workout {
            id: "w".to_string(),
            user_id: "u".to_string(),
            name: "Run".to_string(),
            description: None,
            duration,
            calories,
            date: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_totals() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let summary = DailySummary::from_records(
            date,
            &[meal(500, Some(30.0)), meal(250, None)],
            &[workout(30, Some(300)), workout(45, None)],
        );

        assert_eq!(summary.calories_consumed, 750);
        assert_eq!(summary.protein, 30.0);
        assert_eq!(summary.carbs, 20.0);
        assert_eq!(summary.fat, 0.0);
        assert_eq!(summary.meal_count, 2);
        assert_eq!(summary.calories_burned, 300);
        assert_eq!(summary.workout_minutes, 75);
        assert_eq!(summary.workout_count, 2);
        assert_eq!(summary.net_calories, 450);
    }

    #[test]
    fn test_empty_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let summary = DailySummary::from_records(date, &[], &[]);

        assert_eq!(summary.calories_consumed, 0);
        assert_eq!(summary.net_calories, 0);
        assert_eq!(summary.meal_count, 0);
    }
}
