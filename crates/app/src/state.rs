use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

pub const APP_NAME: &str = "roomctl";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/";

/// On-disk defaults for connecting to the service.
///
/// Every key is optional; flags and `ROOMCTL_*` variables win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: Option<Url>,
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// The roomctl directory (~/.roomctl)
    pub fn roomctl_dir() -> Result<PathBuf, StateError> {
        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    pub fn default_config_path() -> Result<PathBuf, StateError> {
        Ok(Self::roomctl_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Writes `config` to `config_path` (or the default path). Refuses to
    /// overwrite an existing file.
    pub fn init(config_path: Option<PathBuf>, config: AppConfig) -> Result<Self, StateError> {
        let config_path = match config_path {
            Some(path) => path,
            None => Self::default_config_path()?,
        };
        if config_path.exists() {
            return Err(StateError::AlreadyInitialized(config_path));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Loads the config file.
    ///
    /// An explicitly named file must exist; a missing default file just means
    /// there is nothing to load.
    pub fn load(config_path: Option<PathBuf>) -> Result<Option<Self>, StateError> {
        match config_path {
            Some(path) if !path.exists() => Err(StateError::MissingFile(path)),
            Some(path) => Self::read(&path).map(Some),
            None => {
                let path = Self::default_config_path()?;
                if path.exists() {
                    Self::read(&path).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, StateError> {
        let config_toml = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;
        tracing::debug!(path = %path.display(), "loaded config");

        Ok(Self {
            config_path: path.to_path_buf(),
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("config file already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = AppConfig {
            endpoint: Some(Url::parse(DEFAULT_ENDPOINT).unwrap()),
            region: Some("eu-west-1".into()),
            timeout_secs: Some(10),
            ..Default::default()
        };

        let state = AppState::init(Some(path.clone()), config.clone()).unwrap();
        assert_eq!(state.config_path, path);

        let loaded = AppState::load(Some(path)).unwrap().unwrap();
        assert_eq!(loaded.config, config);
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "region = \"x\"\n").unwrap();

        let err = AppState::init(Some(path), AppConfig::default()).unwrap_err();
        assert!(matches!(err, StateError::AlreadyInitialized(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppState::load(Some(dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, StateError::MissingFile(_)));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let contents = "access_key_id = \"AKID\"\nsecret_access_key = \"s\"\n";
        fs::write(&path, contents).unwrap();

        let loaded = AppState::load(Some(path)).unwrap().unwrap();
        assert_eq!(loaded.config.access_key_id.as_deref(), Some("AKID"));
        assert!(loaded.config.endpoint.is_none());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "endpoint = \"not a url\"\n").unwrap();

        let err = AppState::load(Some(path)).unwrap_err();
        assert!(matches!(err, StateError::TomlDe(_)));
    }
}
