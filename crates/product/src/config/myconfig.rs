use anyhow::{Context, Result, anyhow};

const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MAX_CONN: u32 = 5;
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_conn: u32,
    pub dev_mode: bool,
    pub enable_file_log: bool,
    pub static_dir: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source; unset keys fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let db_max_conn = match lookup("DB_MAX_CONN") {
            Some(max) => max
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => DEFAULT_DB_MAX_CONN,
        };

        if db_max_conn == 0 {
            return Err(anyhow!("DB_MAX_CONN must be greater than zero"));
        }

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            database_url,
            host,
            port,
            db_max_conn,
            dev_mode,
            enable_file_log,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.database_url, "sqlite://products.db");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.db_max_conn, 5);
        assert!(!config.dev_mode);
        assert!(!config.enable_file_log);
        assert!(config.static_dir.ends_with("/static"));
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEV_MODE", "1"),
            ("ENABLE_FILE_LOG", "true"),
            ("STATIC_DIR", "/srv/products/static"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.dev_mode);
        assert!(config.enable_file_log);
        assert_eq!(config.static_dir, "/srv/products/static");
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
        assert!(config_from(&[("DB_MAX_CONN", "0")]).is_err());
    }
}
