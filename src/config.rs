// config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    BadAddr { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got {value}")]
    BadNumber { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value}")]
    BadBool { var: &'static str, value: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub schema_path: String,
    pub seed_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Adds `Secure` to the session cookie. Turn on behind HTTPS.
    pub secure_cookies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "housing.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            seed_path: "sql/seed.sql".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
            max_workers: 8,
            secure_cookies: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("HOUSING_DB_PATH") {
            cfg.db_path = v;
        }
        if let Some(v) = lookup("HOUSING_SCHEMA_PATH") {
            cfg.schema_path = v;
        }
        if let Some(v) = lookup("HOUSING_SEED_PATH") {
            cfg.seed_path = v;
        }
        if let Some(v) = lookup("HOUSING_BIND_ADDR") {
            cfg.bind_addr = v.parse().map_err(|_| ConfigError::BadAddr {
                var: "HOUSING_BIND_ADDR",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("HOUSING_MAX_WORKERS") {
            cfg.max_workers = match v.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::BadNumber {
                        var: "HOUSING_MAX_WORKERS",
                        value: v,
                    })
                }
            };
        }
        if let Some(v) = lookup("HOUSING_SECURE_COOKIES") {
            cfg.secure_cookies = match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::BadBool {
                        var: "HOUSING_SECURE_COOKIES",
                        value: v,
                    })
                }
            };
        }

        Ok(cfg)
    }
}
