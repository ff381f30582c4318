use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::CurrencyFormat;
use crate::intake::document::PDF_MEDIA_TYPE;
use crate::intake::PlaceholderFigures;

const DEFAULT_DIR_NAME: &str = ".paytick";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "paytick.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub accepted_types: Vec<String>,
    pub currency: CurrencyFormat,
    pub placeholder: PlaceholderFigures,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accepted_types: vec![PDF_MEDIA_TYPE.to_string()],
            currency: CurrencyFormat::default(),
            placeholder: PlaceholderFigures::default(),
        }
    }
}

impl Settings {
    /// `~/.paytick` unless a base directory is given. Created when missing.
    pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
        let path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        Ok(path)
    }

    pub fn load(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = Self::data_dir(base_dir)?;
        Self::load_from(&dir.join(CONFIG_FILE_NAME))
    }

    /// A missing file means defaults. A file that exists must parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Could not open settings {}", path.display()));
            }
        };
        let settings: Settings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// An explicit settings path wins and the data directory is never touched.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path),
            None => Ok(Self::data_dir(None)?.join(CONFIG_FILE_NAME)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{ "currency": {{ "symbol": "EUR" }} }}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.currency.symbol, "EUR");
        assert_eq!(settings.currency.fraction_digits, 4);
        assert_eq!(settings.accepted_types, vec![PDF_MEDIA_TYPE.to_string()]);
        assert_eq!(settings.placeholder, PlaceholderFigures::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_stale_tick_period_key_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "tick_period_ms": 250 }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_explicit_path_skips_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("nowhere").join("custom.json");

        let resolved = Settings::resolve_path(Some(explicit.clone())).unwrap();
        assert_eq!(resolved, explicit);
        assert!(!dir.path().join("nowhere").exists());
    }

    #[test]
    fn test_data_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let resolved = Settings::data_dir(Some(nested.clone())).unwrap();
        assert_eq!(resolved, nested);
        assert!(nested.is_dir());
    }
}
