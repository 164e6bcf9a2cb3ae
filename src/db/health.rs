//! Health record storage.

use super::Db;
use crate::error::AppError;
use crate::models::{HealthRecord, NewHealthRecord};
use chrono::Utc;

impl Db {
    /// All health records for a user, newest first.
    pub async fn list_health_records_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<HealthRecord>, AppError> {
        let records = sqlx::query_as::<_, HealthRecord>(
            "SELECT * FROM health_records WHERE user_id = ? ORDER BY date DESC, rowid DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    pub async fn get_health_record(&self, id: &str) -> Result<Option<HealthRecord>, AppError> {
        let record = sqlx::query_as::<_, HealthRecord>("SELECT * FROM health_records WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    /// Store a new health record. BMI is derived here so it always matches
    /// the stored weight and height.
    pub async fn create_health_record(
        &self,
        user_id: &str,
        new_record: NewHealthRecord,
    ) -> Result<HealthRecord, AppError> {
        let record = HealthRecord {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            weight: new_record.weight,
            height: new_record.height,
            bmi: new_record.bmi(),
            blood_pressure: new_record.blood_pressure,
            heart_rate: new_record.heart_rate,
            date: new_record.date.unwrap_or_else(Utc::now),
        };

        sqlx::query(
            r#"
            INSERT INTO health_records
                (id, user_id, weight, height, bmi, blood_pressure, heart_rate, date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(record.weight)
        .bind(record.height)
        .bind(record.bmi)
        .bind(&record.blood_pressure)
        .bind(record.heart_rate)
        .bind(record.date)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete_health_record(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM health_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        super::expect_deleted(result.rows_affected(), "Health record")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;

    #[tokio::test]
    async fn test_health_record_stores_bmi() {
        let db = Db::in_memory().await.unwrap();
        let user = db
            .create_user(NewUser {
                email: "jane@x.com".to_string(),
                name: "Jane".to_string(),
                password_hash: "hash".to_string(),
                profile_picture: None,
            })
            .await
            .unwrap();

        let record = db
            .create_health_record(
                &user.id,
                NewHealthRecord {
                    weight: Some(75.5),
                    height: Some(180.0),
                    blood_pressure: Some("120/80".to_string()),
                    heart_rate: Some(68),
                    date: None,
                },
            )
            .await
            .unwrap();

        let stored = db.get_health_record(&record.id).await.unwrap().unwrap();
        assert_eq!(stored.bmi, Some(23.3));
        assert_eq!(stored.blood_pressure.as_deref(), Some("120/80"));

        let listed = db.list_health_records_for_user(&user.id).await.unwrap();
        assert_eq!(listed.len(), 1);

        db.delete_health_record(&record.id).await.unwrap();
        assert!(db.get_health_record(&record.id).await.unwrap().is_none());
    }
}
