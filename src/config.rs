//! Application configuration loaded from TOML, with command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use jeepway_core::DEFAULT_THRESHOLD_METERS;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::{Cli, Command};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error(transparent)]
    Core(#[from] jeepway_core::Error),
    #[error("Route geometry not found for '{0}'")]
    RouteNotFound(String),
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// GeoJSON FeatureCollection with route geometries
    pub data_path: PathBuf,
    /// Search radius around destinations
    pub threshold_meters: f64,
    /// Default log filter, `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/jeepney_routes.geojson"),
            threshold_meters: DEFAULT_THRESHOLD_METERS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the config file if one is given, otherwise uses defaults
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    /// Command-line flags win over file values
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(data) = &cli.data {
            self.data_path.clone_from(data);
        }

        if let Command::Nearby {
            threshold: Some(threshold),
            ..
        } = &cli.command
        {
            self.threshold_meters = *threshold;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.threshold_meters, 500.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str("threshold_meters = 250.0\n").unwrap();
        assert_eq!(config.threshold_meters, 250.0);
        assert_eq!(config.data_path, PathBuf::from("data/jeepney_routes.geojson"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::from_toml_str(
            r#"
            data_path = "/srv/routes/manila.geojson"
            threshold_meters = 800.0
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("/srv/routes/manila.geojson"));
        assert_eq!(config.threshold_meters, 800.0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_and_mistyped_fields() {
        assert!(matches!(
            AppConfig::from_toml_str("radius = 500.0\n"),
            Err(AppError::ConfigParse(_))
        ));
        assert!(AppConfig::from_toml_str("threshold_meters = \"far\"\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/jeepway.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "jeepway",
            "--data",
            "other.geojson",
            "nearby",
            "--dest",
            "14.56,120.98",
            "--threshold",
            "120",
        ])
        .unwrap();

        let config = AppConfig::default().with_overrides(&cli);
        assert_eq!(config.data_path, PathBuf::from("other.geojson"));
        assert_eq!(config.threshold_meters, 120.0);

        let cli = Cli::try_parse_from(["jeepway", "routes"]).unwrap();
        let config = AppConfig::from_toml_str("threshold_meters = 300.0")
            .unwrap()
            .with_overrides(&cli);
        assert_eq!(config.threshold_meters, 300.0);
    }
}
