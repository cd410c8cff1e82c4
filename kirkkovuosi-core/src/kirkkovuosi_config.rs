//! Global kirkkovuosi configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::data::ReferenceData;
use crate::error::{KirkkovuosiError, KirkkovuosiResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/kirkkovuosi";
static DEFAULT_HOLY_DAYS_FILE: &str = "pyhapaivat.json";
static DEFAULT_PROPERS_FILE: &str = "propersit.json";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_holy_days_file() -> String {
    DEFAULT_HOLY_DAYS_FILE.to_string()
}

fn default_propers_file() -> String {
    DEFAULT_PROPERS_FILE.to_string()
}

/// Configuration at ~/.config/kirkkovuosi/config.toml
///
/// Every key can also be set through a `KIRKKOVUOSI_` environment variable,
/// e.g. `KIRKKOVUOSI_DATA_DIR`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KirkkovuosiConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_holy_days_file")]
    pub holy_days_file: String,

    #[serde(default = "default_propers_file")]
    pub propers_file: String,
}

impl Default for KirkkovuosiConfig {
    fn default() -> Self {
        KirkkovuosiConfig {
            data_dir: default_data_dir(),
            holy_days_file: default_holy_days_file(),
            propers_file: default_propers_file(),
        }
    }
}

impl KirkkovuosiConfig {
    pub fn config_path() -> KirkkovuosiResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KirkkovuosiError::Config("Could not determine config directory".into()))?
            .join("kirkkovuosi");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file first
    /// if none exists yet.
    pub fn load() -> KirkkovuosiResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing), then apply environment overrides.
    pub fn load_from(path: &Path) -> KirkkovuosiResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("KIRKKOVUOSI"))
            .build()
            .map_err(|e| KirkkovuosiError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| KirkkovuosiError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> KirkkovuosiResult<()> {
        let contents = format!(
            "\
# kirkkovuosi configuration

# Directory holding the reference data:
# data_dir = \"{}\"

# Holy-day records, relative to data_dir:
# holy_days_file = \"{}\"

# Prefaces, litanies and psalm refrains, relative to data_dir:
# propers_file = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_HOLY_DAYS_FILE, DEFAULT_PROPERS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                KirkkovuosiError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| KirkkovuosiError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn holy_days_path(&self) -> PathBuf {
        self.data_path().join(&self.holy_days_file)
    }

    pub fn propers_path(&self) -> PathBuf {
        self.data_path().join(&self.propers_file)
    }

    pub fn load_reference_data(&self) -> KirkkovuosiResult<ReferenceData> {
        ReferenceData::load(&self.holy_days_path(), &self.propers_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        KirkkovuosiConfig::create_default_config(&path).expect("Should write default config");
        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.contains("# data_dir = \"~/.local/share/kirkkovuosi\""));

        let config: KirkkovuosiConfig =
            toml::from_str(&written).expect("Commented config should parse");
        assert_eq!(config, KirkkovuosiConfig::default());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let contents = "data_dir = \"/srv/kirkkovuosi\"\npropers_file = \"propers.json\"\n";
        fs::write(&path, contents).expect("write");

        let config = KirkkovuosiConfig::load_from(&path).expect("Should load");
        assert_eq!(config.holy_days_path(), PathBuf::from("/srv/kirkkovuosi/pyhapaivat.json"));
        assert_eq!(config.propers_path(), PathBuf::from("/srv/kirkkovuosi/propers.json"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = KirkkovuosiConfig::load_from(&dir.path().join("absent.toml"));
        assert!(config.is_ok());
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = KirkkovuosiConfig::default().with_data_dir("~/pyhat");
        let expanded = config.data_path();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("pyhat"));
    }

    #[test]
    fn test_loads_reference_data_from_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let holy_days = r#"[{ "slug": "loppiainen", "name": "Loppiainen" }]"#;
        fs::write(dir.path().join("pyhapaivat.json"), holy_days).expect("write");
        fs::write(dir.path().join("propersit.json"), "{}").expect("write");

        let data = KirkkovuosiConfig::default()
            .with_data_dir(dir.path())
            .load_reference_data()
            .expect("Should load");
        assert!(!data.is_empty());
    }
}
