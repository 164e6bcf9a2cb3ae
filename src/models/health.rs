// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Health measurement model (weight, height, vitals).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored health record, owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthRecord {
    pub id: String,
    /// Owning user ID
    pub user_id: String,
    /// Kilograms
    pub weight: Option<f64>,
    /// Centimeters
    pub height: Option<f64>,
    /// Derived from weight and height when both are present
    pub bmi: Option<f64>,
    /// "systolic/diastolic", e.g. "120/80"
    pub blood_pressure: Option<String>,
    /// Beats per minute
    pub heart_rate: Option<i64>,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: DateTime<Utc>,
}

/// Validated fields for a new health record.
#[derive(Debug, Clone, Default)]
pub struct NewHealthRecord {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub blood_pressure: Option<String>,
    pub heart_rate: Option<i64>,
    /// None means "now"
    pub date: Option<DateTime<Utc>>,
}

impl NewHealthRecord {
    /// BMI = kg / m², rounded to one decimal.
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight, self.height) {
            (Some(weight), Some(height)) if weight > 0.0 && height > 0.0 => {
                let meters = height / 100.0;
                Some((weight / (meters * meters) * 10.0).round() / 10.0)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_rounding() {
        let record = NewHealthRecord {
            weight: Some(75.5),
            height: Some(180.0),
            ..Default::default()
        };
        assert_eq!(record.bmi(), Some(23.3));

        let record = NewHealthRecord {
            weight: Some(75.0),
            height: Some(180.0),
            ..Default::default()
        };
        assert_eq!(record.bmi(), Some(23.1));
    }

    #[test]
    fn test_bmi_requires_both_measurements() {
        let record = NewHealthRecord {
            weight: Some(75.0),
            ..Default::default()
        };
        assert_eq!(record.bmi(), None);

        let record = NewHealthRecord {
            weight: Some(75.0),
            height: Some(0.0),
            ..Default::default()
        };
        assert_eq!(record.bmi(), None);
    }
}
