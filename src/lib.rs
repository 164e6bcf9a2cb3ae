// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Healthtrack: personal nutrition and fitness tracking
//!
//! This crate provides the backend API: account registration and login,
//! bearer-token authentication, and owner-scoped storage of meals,
//! workouts and health measurements.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Db;
use services::{CatalogService, TokenService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub tokens: TokenService,
    pub catalog: CatalogService,
}

impl AppState {
    /// Assemble state; the token service is keyed from `config`.
    pub fn new(config: Config, db: Db, catalog: CatalogService) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_secs);
        Self {
            config,
            db,
            tokens,
            catalog,
        }
    }
}
