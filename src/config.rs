use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Settings for the tool around the converter. Conversion itself takes none.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LogConfig {
    /// Unknown level names fall back to `warn`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Warn)
    }
}

impl Config {
    /// The bundled `default_config.toml`.
    pub fn compiled_default() -> Self {
        // build.rs has already checked the file parses
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::compiled_default()),
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn compiled_default_is_warn() {
        let config = Config::compiled_default();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.log.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn reads_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("md2html.toml");
        fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn empty_file_uses_section_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("md2html.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn unknown_level_falls_back() {
        let config = LogConfig {
            level: "loud".to_string(),
        };
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("md2html.toml");
        fs::write(&path, "[log\nlevel = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().starts_with("Invalid config"));
    }
}
