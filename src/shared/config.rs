use std::{env, str::FromStr};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {name} value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Reads a required, non-blank variable.
pub fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Reads an optional variable, falling back to `default` when it is absent.
pub fn parsed_var_or<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        _ => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
}

impl ServerConfig {
    pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

    /// Load server configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = required_var("HOST")?;
        let port_raw = required_var("PORT")?;
        let port = port_raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw.clone(),
        })?;
        let database_url = required_var("DATABASE_URL")?;
        let db_max_connections =
            parsed_var_or("DB_MAX_CONNECTIONS", Self::DEFAULT_DB_MAX_CONNECTIONS)?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
