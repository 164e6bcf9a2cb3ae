// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod ownership;
pub mod password;
pub mod token;

pub use catalog::{CatalogError, CatalogService, SeedReport};
pub use ownership::{require_owner, require_self, Owned};
pub use password::{hash_password, verify_password, PasswordError};
pub use token::{Claims, TokenError, TokenService};
