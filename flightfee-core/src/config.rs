//! Configuration management for flight fee summaries
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (FLIGHTFEE_*)
//! 3. Config file (~/.config/flightfee/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Route shown in the report header
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Departure city
    pub origin: String,

    /// Arrival city
    pub destination: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            origin: "Beijing".to_string(),
            destination: "New York".to_string(),
        }
    }
}

/// Output formatting configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Symbol printed in front of every fee
    pub currency_symbol: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Route configuration
    pub route: RouteConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub currency_symbol: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/flightfee/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flightfee").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - FLIGHTFEE_ORIGIN: Departure city
    /// - FLIGHTFEE_DESTINATION: Arrival city
    /// - FLIGHTFEE_CURRENCY: Currency symbol
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(origin) = std::env::var("FLIGHTFEE_ORIGIN") {
            self.route.origin = origin;
        }

        if let Ok(destination) = std::env::var("FLIGHTFEE_DESTINATION") {
            self.route.destination = destination;
        }

        if let Ok(symbol) = std::env::var("FLIGHTFEE_CURRENCY") {
            self.output.currency_symbol = symbol;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(origin) = overrides.origin {
            self.route.origin = origin;
        }

        if let Some(destination) = overrides.destination {
            self.route.destination = destination;
        }

        if let Some(symbol) = overrides.currency_symbol {
            self.output.currency_symbol = symbol;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// An explicit `path` must exist; otherwise the default location is
    /// used when present. Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        Ok(base.with_env_overrides().with_cli_overrides(overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.route.origin, "Beijing");
        assert_eq!(config.route.destination, "New York");
        assert_eq!(config.output.currency_symbol, "$");
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(ConfigOverrides {
            origin: Some("Shanghai".to_string()),
            destination: None,
            currency_symbol: Some("€".to_string()),
        });

        assert_eq!(config.route.origin, "Shanghai");
        assert_eq!(config.route.destination, "New York");
        assert_eq!(config.output.currency_symbol, "€");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[route]
origin = "Guangzhou"
destination = "Los Angeles"

[output]
currency_symbol = "¥"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.route.origin, "Guangzhou");
        assert_eq!(config.route.destination, "Los Angeles");
        assert_eq!(config.output.currency_symbol, "¥");
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[route]
destination = "Boston"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // origin and currency should use defaults
        assert_eq!(config.route.origin, "Beijing");
        assert_eq!(config.route.destination, "Boston");
        assert_eq!(config.output.currency_symbol, "$");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ncurrency_symbol = \"USD \"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.output.currency_symbol, "USD ");
        assert_eq!(config.route, RouteConfig::default());
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[route\norigin = ").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load_with_overrides(Some(&missing), ConfigOverrides::default())
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
