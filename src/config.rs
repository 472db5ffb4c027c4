use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; unset variables
    /// fall back to the defaults used by the docker-compose setup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            host: var_or("POSTGRES_HOST", "db"),
            user: var_or("POSTGRES_USER", "postgres"),
            password: var_or("POSTGRES_PASSWORD", "postgres"),
            database: var_or("POSTGRES_DB", "postgres"),
            port: parse_port("POSTGRES_PORT", lookup("POSTGRES_PORT"), 5432)?,
        };

        Ok(Self {
            database,
            http_port: parse_port("PORT", lookup("PORT"), 3000)?,
        })
    }
}

fn parse_port(var: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) => Ok(port),
        Err(_) => Err(ConfigError::InvalidPort { var, value: raw }),
    }
}
