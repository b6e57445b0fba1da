//! Database location from the environment.
//!
//! Either a full `DATABASE_URL`, or an `INSTANCE_HOST` plus `DB_*`
//! credential variables (TCP socket to a managed Postgres instance).
//! Neither being set is a fatal startup condition.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing database connection parameter: set DATABASE_URL or INSTANCE_HOST")]
    MissingDatabase,

    #[error("missing required variable {0} (required with INSTANCE_HOST)")]
    MissingVar(&'static str),
}

/// Resolve the database URL from the process environment.
pub fn resolve_database_url() -> Result<String, ConfigError> {
    match env::var("DATABASE_URL") {
        Ok(url) => Ok(url),
        Err(_) => url_from_instance_host(),
    }
}

/// Compose a Postgres URL from `INSTANCE_HOST` and the `DB_*` variables.
fn url_from_instance_host() -> Result<String, ConfigError> {
    let host = env::var("INSTANCE_HOST").map_err(|_| ConfigError::MissingDatabase)?;
    let user = env::var("DB_USER").map_err(|_| ConfigError::MissingVar("DB_USER"))?;
    let pass = env::var("DB_PASS").map_err(|_| ConfigError::MissingVar("DB_PASS"))?;
    let name = env::var("DB_NAME").map_err(|_| ConfigError::MissingVar("DB_NAME"))?;
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());

    Ok(format!("postgres://{user}:{pass}@{host}:{port}/{name}"))
}
