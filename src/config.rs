// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Fallback signing key for local development only.
const FALLBACK_SECRET_KEY: &str = "fallback_secret_key";

/// One day.
pub const DEFAULT_SESSION_EXPIRATION: u64 = 86_400;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub session_expiration: u64,
    pub secure_cookies: bool,
    pub bind_address: String,
    pub static_dir: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| database_url_from_parts());

        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| FALLBACK_SECRET_KEY.to_string());

        let session_expiration = env::var("SESSION_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SESSION_EXPIRATION);

        let secure_cookies = env::var("SECURE_COOKIES")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            secret_key,
            session_expiration,
            secure_cookies,
            bind_address,
            static_dir,
            rust_log,
        }
    }

    pub fn uses_fallback_secret(&self) -> bool {
        self.secret_key == FALLBACK_SECRET_KEY
    }

    /// Configuration for tests and local demos that never touch the environment.
    pub fn for_tests(secret_key: &str) -> Self {
        Self {
            database_url: String::new(),
            secret_key: secret_key.to_string(),
            session_expiration: 600,
            secure_cookies: false,
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: "static".to_string(),
            rust_log: "error".to_string(),
        }
    }
}

/// Builds a Postgres URL from the individual `DB_*` variables.
fn database_url_from_parts() -> String {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| "signmaster".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "system".to_string());

    format!("postgres://{user}:{password}@{host}/{name}")
}
