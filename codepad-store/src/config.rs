//! Environment-sourced database configuration
//!
//! All five connection parameters are required; a missing variable fails
//! fast here instead of surfacing later as a connection error.

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Connection parameters for the session database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database: String,
    pub host: String,
    pub password: String,
    pub port: u16,
    pub user: String,
}

impl DbConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file is loaded first when present (best effort).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Backs [`from_env`](Self::from_env); lets tests supply values without
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let database = require("DB_DATABASE")?;
        let host = require("DB_HOSTNAME")?;
        let password = require("DB_PASSWORD")?;
        let port_raw = require("DB_PORT")?;
        let user = require("DB_USER")?;

        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            var: "DB_PORT",
            value: port_raw,
        })?;

        Ok(Self {
            database,
            host,
            password,
            port,
            user,
        })
    }

    /// Connection options for the sqlx Postgres driver.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loads_complete_configuration() {
        let vars = env(&[
            ("DB_DATABASE", "codepad"),
            ("DB_HOSTNAME", "db.internal"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_PORT", "5432"),
            ("DB_USER", "codepad"),
        ]);

        let config = DbConfig::from_lookup(|var| vars.get(var).cloned()).unwrap();
        assert_eq!(config.database, "codepad");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "codepad");
    }

    #[test]
    fn missing_variable_fails_fast() {
        let vars = env(&[
            ("DB_DATABASE", "codepad"),
            ("DB_HOSTNAME", "db.internal"),
            ("DB_PORT", "5432"),
            ("DB_USER", "codepad"),
        ]);

        let err = DbConfig::from_lookup(|var| vars.get(var).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_PASSWORD")));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let vars = env(&[
            ("DB_DATABASE", "codepad"),
            ("DB_HOSTNAME", "db.internal"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_PORT", "fivefourthreetwo"),
            ("DB_USER", "codepad"),
        ]);

        let err = DbConfig::from_lookup(|var| vars.get(var).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_PORT", .. }));
    }
}
