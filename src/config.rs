//! Application configuration loaded from environment variables.
//!
//! The token signing secret is mandatory: a server without one must not
//! issue or accept tokens, so loading fails and the process refuses to start.

use std::env;

/// Default token lifetime (1 hour).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Database connection string (sqlx SQLite URL)
    pub database_url: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Bearer token lifetime in seconds
    pub token_ttl_secs: i64,
    /// Path to the meal/workout catalog JSON file
    pub catalog_path: String,

    // --- Secrets ---
    /// JWT signing key for bearer tokens (raw bytes)
    pub jwt_secret: Vec<u8>,
}

impl Config {
    /// Config for tests: in-memory database, fixed secret.
    pub fn test_default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 3001,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            catalog_path: "data/catalog.json".to_string(),
            jwt_secret: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let jwt_secret = env::var("JWT_SECRET")
            .map(|v| v.trim().to_string())
            .map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }

        let token_ttl_secs = match env::var("TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigError::Invalid("TOKEN_TTL_SECS"))?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 3001,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://healthtrack.db?mode=rwc".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
            token_ttl_secs,
            catalog_path: env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/catalog.json".to_string()),
            jwt_secret: jwt_secret.into_bytes(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Environment variable must not be empty: {0}")]
    Empty(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
