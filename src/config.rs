//! TOML-backed analysis settings.
//!
//! A configuration file only needs the keys it changes:
//!
//! ```
//! use molecool::{AngleUnit, Config};
//!
//! let config = Config::from_toml_str("[bonds]\nmax_bond = 1.7\n")?;
//! assert_eq!(config.bonds.min_bond, 0.0);
//! assert_eq!(config.bonds.max_bond, 1.7);
//! assert_eq!(config.angles.unit, AngleUnit::Radians);
//! # Ok::<(), molecool::ConfigError>(())
//! ```

use crate::bonds::BondWindow;
use crate::geometry::AngleUnit;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Annotated copy of the built-in defaults.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../resources/default.config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bond threshold {name} must be finite, got {value}")]
    InvalidWindow { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AngleSettings {
    pub unit: AngleUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bonds: BondWindow,
    pub angles: AngleSettings,
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Rejects non-finite thresholds. An empty window is accepted with a warning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("min_bond", self.bonds.min_bond),
            ("max_bond", self.bonds.max_bond),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidWindow { name, value });
            }
        }

        if self.bonds.is_empty() {
            warn!(
                "min_bond ({}) >= max_bond ({}): no bonds can be inferred",
                self.bonds.min_bond, self.bonds.max_bond
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_default_impl() {
        let parsed = Config::from_toml_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let doc = "[bonds]\nmin_bond = 0.4\n[angles]\nunit = \"degrees\"\n";
        let config = Config::from_toml_str(doc).unwrap();
        assert_eq!(config.bonds, BondWindow::new(0.4, 1.5));
        assert_eq!(config.angles.unit, AngleUnit::Degrees);
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = Config::from_toml_str("[bond]\nmax_bond = 2.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = Config::from_toml_str("[angles]\nunit = \"gradians\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let err = Config::from_toml_str("[bonds]\nmax_bond = inf\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWindow {
                name: "max_bond",
                ..
            }
        ));
    }

    #[test]
    fn misspelled_keys_inside_sections_are_rejected() {
        for doc in ["[bonds]\nmax_bnd = 0.5\n", "[angles]\nunits = \"degrees\"\n"] {
            let err = Config::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, ConfigError::Parse(_)), "{doc}");
        }
    }

    #[test]
    fn inverted_window_is_accepted() {
        let config = Config::from_toml_str("[bonds]\nmin_bond = 2.0\nmax_bond = 1.0\n").unwrap();
        assert!(config.bonds.is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bonds]\nmax_bond = 1.8").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.bonds.max_bond, 1.8);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Config::load(Path::new("/nonexistent/molecool.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/molecool.toml"));
    }
}
