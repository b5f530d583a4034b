//! Process configuration read from the environment at startup.

use std::env;

use crate::error::AppError;

pub const DB_CONNECTION_STRING: &str = "DB_CONNECTION_STRING";
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source; `from_env` passes `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = must_var(&lookup, DB_CONNECTION_STRING)?;
        let host = lookup(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("{PORT} must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}

fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            AppError::config(format!("Required environment variable '{name}' is not set"))
        })
}
