// src/config.rs
use anyhow::{Context, Result};
use log::{info, warn};
use std::env;

use crate::services::projection::DEFAULT_MAX_PROJECTION_YEARS;

pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_DATA_SOURCE: &str = "https://oliverwkim.com/assets/mountain_to_climb/pwt_10.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    /// URL or file path of the GDP CSV.
    pub data_source: String,
    pub max_projection_years: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: DEFAULT_PORT,
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            max_projection_years: DEFAULT_MAX_PROJECTION_YEARS,
        }
    }
}

impl AppConfig {
    /// Reads `PORT`, `DATA_SOURCE` and `MAX_PROJECTION_YEARS`. Call
    /// `dotenv().ok()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = match lookup("PORT") {
            Some(port_str) => port_str
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a number, got '{}'", port_str))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                defaults.port
            }
        };

        let data_source = lookup("DATA_SOURCE").unwrap_or(defaults.data_source);

        let max_projection_years = match lookup("MAX_PROJECTION_YEARS") {
            Some(value) => value.trim().parse().with_context(|| {
                format!("MAX_PROJECTION_YEARS must be a positive integer, got '{}'", value)
            })?,
            None => defaults.max_projection_years,
        };

        info!(
            "Config: port={}, data_source={}, max_projection_years={}",
            port, data_source, max_projection_years
        );

        Ok(AppConfig {
            port,
            data_source,
            max_projection_years,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("DATA_SOURCE", "data/pwt.csv"),
            ("MAX_PROJECTION_YEARS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_source, "data/pwt.csv");
        assert_eq!(config.max_projection_years, 250);
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
