//! # Viewer Configuration
//!
//! Collects every tunable of the viewer in one place. Missing fields fall back
//! to defaults, so a config file only needs the values it changes.
//!
//! ```rust
//! use formation_core::config::ViewerConfig;
//!
//! let config = ViewerConfig::default();
//! assert_eq!(config.default_players, 11);
//! let compact = ViewerConfig::compact();
//! assert!(compact.ascii.rows < config.ascii.rows);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::formation::{FormationParser, DEFAULT_DELIMITER};
use crate::roster::DEFAULT_PLAYER_COUNT;
use crate::scene::SceneConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Ascii,
    Json,
}

/// Smallest grid side the terminal renderer can project onto
pub const MIN_GRID_CELLS: usize = 2;

/// Character grid used by the terminal renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsciiConfig {
    /// Cells across the pitch width
    pub columns: usize,
    /// Cells along the pitch length
    pub rows: usize,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        // roughly 2m per cell, keeping the 68:105 aspect
        Self {
            columns: 35,
            rows: 54,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Squad size assumed when the user gives none
    pub default_players: i64,
    /// Separator between formation line sizes
    pub delimiter: char,
    pub output: OutputFormat,
    pub scene: SceneConfig,
    pub ascii: AsciiConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_players: DEFAULT_PLAYER_COUNT,
            delimiter: DEFAULT_DELIMITER,
            output: OutputFormat::default(),
            scene: SceneConfig::default(),
            ascii: AsciiConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Small grid for narrow terminals
    pub fn compact() -> Self {
        let mut cfg = Self::default();
        cfg.ascii = AsciiConfig {
            columns: 24,
            rows: 36,
        };
        cfg.scene.circle_segments = 48;
        cfg
    }

    /// Load from a `.yaml`/`.yml` or `.json` file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let text = fs::read_to_string(path)?;
        let config: Self = match ext.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        config.validate()?;
        log::debug!("Loaded viewer config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ascii.columns < MIN_GRID_CELLS || self.ascii.rows < MIN_GRID_CELLS {
            return Err(ConfigError::Invalid(format!(
                "ascii grid must be at least {m}x{m}, got {}x{}",
                self.ascii.columns,
                self.ascii.rows,
                m = MIN_GRID_CELLS
            )));
        }
        if self.scene.circle_segments < 3 {
            return Err(ConfigError::Invalid(format!(
                "circle_segments must be at least 3, got {}",
                self.scene.circle_segments
            )));
        }
        if self.delimiter.is_ascii_digit() || self.delimiter == '+' {
            return Err(ConfigError::Invalid(format!(
                "delimiter {:?} collides with line sizes",
                self.delimiter
            )));
        }
        Ok(())
    }

    pub fn parser(&self) -> FormationParser {
        FormationParser::new(self.delimiter)
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let cfg = ViewerConfig::default();
        assert_eq!(cfg.default_players, 11);
        assert_eq!(cfg.delimiter, '-');
        assert_eq!(cfg.output, OutputFormat::Ascii);
        assert_eq!(cfg.scene.circle_segments, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_compact_is_valid() {
        assert!(ViewerConfig::compact().validate().is_ok());
    }

    #[test]
    fn test_load_yaml_partial() {
        let file = write_temp(
            ".yaml",
            "default_players: 7\noutput: json\nascii:\n  columns: 20\n",
        );
        let cfg = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(cfg.default_players, 7);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.ascii.columns, 20);
        // unspecified fields keep their defaults
        assert_eq!(cfg.ascii.rows, 54);
        assert_eq!(cfg.delimiter, '-');
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(".json", r#"{"delimiter": ",", "scene": {"label_offset": 1.5}}"#);
        let cfg = ViewerConfig::load(file.path()).unwrap();
        assert_eq!(cfg.delimiter, ',');
        assert_eq!(cfg.scene.label_offset, 1.5);
        assert_eq!(cfg.scene.circle_segments, 100);
        assert_eq!(cfg.parser().parse("3,5,2").lines(), &[3, 5, 2]);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".toml", "default_players = 11");
        let err = ViewerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_temp(".yaml", "ascii:\n  rows: 0\n");
        assert!(matches!(
            ViewerConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let mut cfg = ViewerConfig::default();
        cfg.delimiter = '4';
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_single_column_grid_rejected_at_load() {
        let file = write_temp(".yaml", "ascii:\n  columns: 1\n");
        assert!(matches!(
            ViewerConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let mut cfg = ViewerConfig::default();
        cfg.ascii.columns = MIN_GRID_CELLS;
        cfg.ascii.rows = MIN_GRID_CELLS;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
