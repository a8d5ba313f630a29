//! Load `AppConfig` from environment variables (after `.env` via dotenvy in the binary).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const ENV_BODY_LIMIT_BYTES: &str = "BODY_LIMIT_BYTES";

impl AppConfig {
    /// Read settings from the process environment. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same keys as [`AppConfig::from_env`], resolved through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(ENV_DATABASE_URL)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = parse_or(&lookup, ENV_BIND_ADDR, &DEFAULT_BIND_ADDR.to_string())?;
        let max_connections: u32 = parse_or(
            &lookup,
            ENV_MAX_CONNECTIONS,
            &DEFAULT_MAX_CONNECTIONS.to_string(),
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: ENV_MAX_CONNECTIONS,
                value: "0".into(),
            });
        }
        let body_limit_bytes = parse_or(
            &lookup,
            ENV_BODY_LIMIT_BYTES,
            &DEFAULT_BODY_LIMIT_BYTES.to_string(),
        )?;
        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn default_bind_addr_round_trips_through_env_parsing() {
        let explicit = AppConfig::from_lookup(lookup_from(&[(
            ENV_BIND_ADDR,
            &DEFAULT_BIND_ADDR.to_string(),
        )]))
        .unwrap();
        assert_eq!(explicit.bind_addr, AppConfig::default().bind_addr);
        assert_eq!(DEFAULT_BIND_ADDR.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "sqlite::memory:"),
            (ENV_BIND_ADDR, "127.0.0.1:8080"),
            (ENV_MAX_CONNECTIONS, " 2 "),
            (ENV_BODY_LIMIT_BYTES, "4096"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.body_limit_bytes, 4096);
    }

    #[test]
    fn blank_database_url_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_DATABASE_URL, "  ")])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn unparseable_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_BIND_ADDR, "port 3000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_BIND_ADDR, .. }));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_MAX_CONNECTIONS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_MAX_CONNECTIONS, .. }));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_BODY_LIMIT_BYTES, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_BODY_LIMIT_BYTES, .. }));
    }
}
