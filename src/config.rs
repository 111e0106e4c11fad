//! Optional JSON settings read from `flashy.json` in the working directory.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SETTINGS_FILE: &str = "flashy.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Full reference deck. Never written by the app.
    pub original_path: PathBuf,
    /// Words still to learn.
    pub progress_path: PathBuf,
    pub flip_delay_ms: u64,
    pub source_language: String,
    pub target_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            original_path: PathBuf::from("data/french_words.csv"),
            progress_path: PathBuf::from("data/words_to_learn.csv"),
            flip_delay_ms: 3000,
            source_language: "French".to_string(),
            target_language: "English".to_string(),
        }
    }
}

impl Config {
    pub fn flip_delay(&self) -> Duration {
        Duration::from_millis(self.flip_delay_ms)
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like `load_from`, but falls back to the defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}. Using default settings.");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();

        let config = Config::load_from(&dir.path().join(SETTINGS_FILE)).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.flip_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(
            &path,
            r#"{ "flip_delay_ms": 1500, "source_language": "Spanish" }"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.flip_delay_ms, 1500);
        assert_eq!(config.source_language, "Spanish");
        assert_eq!(config.target_language, "English");
        assert_eq!(config.progress_path, PathBuf::from("data/words_to_learn.csv"));
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }
}
