use anyhow::{Context, Result};
use std::str::FromStr;

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5174",
    "http://localhost:5175",
    "http://localhost:5176",
];

#[derive(Clone, Debug)]
pub struct CafeConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub seed_on_startup: bool,
    pub allowed_origins: Vec<String>,
}

impl CafeConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // same as `from_env`, reading each variable through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://cafe.db".to_string());

        let max_connections = parse_var(&lookup, "MAX_CONNECTIONS", 5)?;
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_var(&lookup, "PORT", 5000)?;
        let debug = parse_flag(&lookup, "DEBUG", true)?;
        let seed_on_startup = parse_flag(&lookup, "SEED_ON_STARTUP", true)?;

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            debug,
            seed_on_startup,
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {} from value '{}'", key, raw)),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => anyhow::bail!("Failed to parse {} as a boolean from value '{}'", key, other),
        },
        None => Ok(default),
    }
}
