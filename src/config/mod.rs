use std::env;
use std::time::Duration;

use chrono::TimeDelta;
use thiserror::Error;

// Tokens live at most a year.
const MAX_EXPIRATION_HOURS: u64 = 24 * 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
    pub jwt_issuer: String,
    pub auth_username: String,
    pub auth_password: String,
    pub auth_admin: bool,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            jwt_secret: String::new(),
            jwt_expiration_secs: 2 * 3600,
            jwt_issuer: "AppName".into(),
            auth_username: "admin".into(),
            auth_password: "admin".into(),
            auth_admin: true,
            server_host: "::".into(),
            server_port: 5000,
            api_base_uri: "/api/v1".into(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. Unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let jwt_expiration_secs = match lookup("JWT_EXPIRATION") {
            Some(raw) => expiration_secs(&raw).ok_or(ConfigError::Invalid {
                var: "JWT_EXPIRATION",
                value: raw,
            })?,
            None => defaults.jwt_expiration_secs,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "SERVER_PORT",
                value: raw,
            })?,
            None => defaults.server_port,
        };

        let auth_admin = match lookup("AUTH_ADMIN") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                var: "AUTH_ADMIN",
                value: raw,
            })?,
            None => defaults.auth_admin,
        };

        let api_base_uri = match lookup("API_BASE_URI") {
            Some(raw) if is_valid_base_uri(&raw) => raw,
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    var: "API_BASE_URI",
                    value: raw,
                });
            }
            None => defaults.api_base_uri,
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            jwt_secret,
            jwt_expiration_secs,
            jwt_issuer: lookup("JWT_ISSUER").unwrap_or(defaults.jwt_issuer),
            auth_username: lookup("AUTH_USERNAME").unwrap_or(defaults.auth_username),
            auth_password: lookup("AUTH_PASSWORD").unwrap_or(defaults.auth_password),
            auth_admin,
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            api_base_uri,
            log_file: lookup("LOG_FILE").filter(|s| !s.is_empty()),
        })
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }
}

/// Parses "24" or "24h" into seconds.
fn expiration_secs(raw: &str) -> Option<u64> {
    let hours = raw
        .trim()
        .trim_end_matches('h')
        .parse::<u64>()
        .ok()
        .filter(|hours| (1..=MAX_EXPIRATION_HOURS).contains(hours))?;
    TimeDelta::try_hours(i64::try_from(hours).ok()?)?;
    hours.checked_mul(3600)
}

// Routes are nested under this prefix, which must look like "/api/v1"
fn is_valid_base_uri(raw: &str) -> bool {
    raw.len() > 1 && raw.starts_with('/') && !raw.ends_with('/')
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
