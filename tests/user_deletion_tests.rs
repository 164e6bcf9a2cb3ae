// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Integration tests for user deletion.
//!
//! Deletion is a storage-level operation (no HTTP route); these tests check
//! that owned records go with the user and that other users are untouched.

use healthtrack_api::db::Db;
use healthtrack_api::models::{NewHealthRecord, NewMeal, NewUser, NewWorkout};

async fn seeded_user(db: &Db, email: &str) -> String {
    let user = db
        .create_user(NewUser {
            email: email.to_string(),
            name: "Delete Me".to_string(),
            password_hash: "hash".to_string(),
            profile_picture: None,
        })
        .await
        .unwrap();

    db.create_meal(
        &user.id,
        NewMeal {
            name: "Oats".to_string(),
            description: None,
            calories: 310,
            protein: None,
            carbs: None,
            fat: None,
            meal_type: None,
            image: None,
            date: None,
        },
    )
    .await
    .unwrap();
    db.create_workout(
        &user.id,
        NewWorkout {
            name: "Yoga".to_string(),
            description: None,
            duration: 30,
            calories: None,
            date: None,
        },
    )
    .await
    .unwrap();
    db.create_health_record(
        &user.id,
        NewHealthRecord {
            weight: Some(70.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    user.id
}

#[tokio::test]
async fn test_delete_user_removes_owned_records() {
    let db = Db::in_memory().await.unwrap();
    let doomed = seeded_user(&db, "doomed@x.com").await;
    let keeper = seeded_user(&db, "keeper@x.com").await;

    db.delete_user(&doomed).await.unwrap();

    assert!(db.get_user(&doomed).await.unwrap().is_none());
    assert!(db.list_meals_for_user(&doomed).await.unwrap().is_empty());
    assert!(db.list_workouts_for_user(&doomed).await.unwrap().is_empty());
    assert!(db.list_health_records_for_user(&doomed).await.unwrap().is_empty());

    assert_eq!(db.list_meals_for_user(&keeper).await.unwrap().len(), 1);
    assert_eq!(db.list_workouts_for_user(&keeper).await.unwrap().len(), 1);
    assert_eq!(db.list_health_records_for_user(&keeper).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let db = Db::in_memory().await.unwrap();

    let result = db.delete_user("no-such-user").await;

    assert!(matches!(
        result,
        Err(healthtrack_api::error::AppError::NotFound(msg)) if msg == "User not found"
    ));
}

#[tokio::test]
async fn test_email_freed_after_deletion() {
    let db = Db::in_memory().await.unwrap();
    let first = seeded_user(&db, "reuse@x.com").await;

    db.delete_user(&first).await.unwrap();
    let second = seeded_user(&db, "reuse@x.com").await;

    assert_ne!(first, second);
    assert_eq!(db.count_users_with_email("reuse@x.com").await.unwrap(), 1);
}
