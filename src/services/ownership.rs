// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ownership checks for owner-scoped resources.
//!
//! Collection routes carry the owner in the path (`/api/meals/:userId`) and
//! are checked with [`require_self`]. Item routes carry only the resource ID;
//! the resource is loaded first and then checked with [`require_owner`], so a
//! missing resource reports `NotFound` before any ownership decision.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{HealthRecord, Meal, Workout};

/// A record that belongs to exactly one user.
pub trait Owned {
    /// Human-readable kind for error messages ("Meal", "Workout", ...).
    const KIND: &'static str;

    fn owner_id(&self) -> &str;
}

impl Owned for Meal {
    const KIND: &'static str = "Meal";

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for Workout {
    const KIND: &'static str = "Workout";

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

impl Owned for HealthRecord {
    const KIND: &'static str = "Health record";

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// The path names the caller's own user ID.
pub fn require_self(user: &AuthUser, path_user_id: &str) -> Result<()> {
    if user.id() != path_user_id {
        tracing::warn!(
            requested_id = %path_user_id,
            authenticated_id = %user.id(),
            "Blocked access to another user's records"
        );
        return Err(AppError::Forbidden);
    }
    Ok(())
}

/// The looked-up resource exists and belongs to the caller.
pub fn require_owner<T: Owned>(user: &AuthUser, resource: Option<T>) -> Result<T> {
    let resource = resource.ok_or_else(|| AppError::NotFound(format!("{} not found", T::KIND)))?;

    if resource.owner_id() != user.id() {
        tracing::warn!(
            kind = T::KIND,
            owner_id = %resource.owner_id(),
            authenticated_id = %user.id(),
            "Blocked access to resource owned by another user"
        );
        return Err(AppError::Forbidden);
    }
    Ok(resource)
}
