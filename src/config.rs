use serde_derive::{Deserialize, Serialize};
use std::io::Read;
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};
use thiserror::*;
use tracing::info;

use crate::datastore::StorageKind;
use crate::result_code::ResultCode;

pub const APP_NAME: &str = "cli-todo";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const DEFAULT_DB_FILE_NAME: &str = "datastore_todo.json";
pub const CONFIG_DIR_ENV: &str = "TODO_CONFIG_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error {0} when reading config")]
    IoError(#[from] std::io::Error),
    #[error("cannot open config file '{0}' : {1}")]
    OpeningError(PathBuf, std::io::Error),
    #[error("UTF8 format error when reading config")]
    Utf8Error,
    #[error("format error {0} when reading config")]
    FormatError(#[from] serde_yaml::Error),
    #[error("no configuration directory could be determined")]
    NoConfigDir,
    #[error("cannot create config directory '{0}' : {1}")]
    DirectoryError(PathBuf, std::io::Error),
    #[error("cannot write config file '{0}' : {1}")]
    WriteError(PathBuf, std::io::Error),
    #[error("cannot create database '{0}' : {1}")]
    DatabaseError(PathBuf, std::io::Error),
}

impl ConfigError {
    pub fn code(&self) -> ResultCode {
        match self {
            ConfigError::NoConfigDir | ConfigError::DirectoryError(..) => {
                ResultCode::DirectoryError
            }
            ConfigError::DatabaseError(..) => ResultCode::DbWriteError,
            ConfigError::IoError(_)
            | ConfigError::OpeningError(..)
            | ConfigError::Utf8Error
            | ConfigError::FormatError(_)
            | ConfigError::WriteError(..) => ResultCode::FileError,
        }
    }

    /// The config file itself is missing, as opposed to unreadable.
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::OpeningError(_, err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageKind,
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_app")]
    pub app: String,
    pub storage: StorageConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<crate::log::Log>,
}

fn default_app() -> String {
    APP_NAME.to_string()
}

impl Config {
    pub fn new(storage: StorageConfig) -> Self {
        Self {
            app: default_app(),
            storage,
            log: None,
        }
    }

    pub fn from_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let mut file = File::open(p).map_err(|e| ConfigError::OpeningError(p.to_owned(), e))?;
        let mut contents = vec![];
        file.read_to_end(&mut contents)?;
        let contents = String::from_utf8(contents).map_err(|_| ConfigError::Utf8Error)?;
        let config = Config::from_str(&contents)?;
        Ok(config)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let p = path.as_ref();
        let contents = serde_yaml::to_string(self)?;
        fs::write(p, contents).map_err(|e| ConfigError::WriteError(p.to_owned(), e))
    }
}

/// Where the application keeps its config file and default database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub dir: PathBuf,
}

impl AppPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolves the app directory: explicit override, then `TODO_CONFIG_DIR`, then the
    /// platform config directory.
    pub fn resolve(dir_override: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(dir) = dir_override {
            return Ok(Self::new(dir));
        }
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(Self::new(dir));
        }
        dirs::config_dir()
            .map(|dir| Self::new(dir.join(APP_NAME)))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    pub fn default_db_file(&self) -> PathBuf {
        self.dir.join(DEFAULT_DB_FILE_NAME)
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        Config::from_file(self.config_file())
    }
}

/// Creates the app directory and writes a config file pointing at `db_path`.
pub fn init_app(paths: &AppPaths, db_path: &Path, backend: StorageKind) -> Result<(), ConfigError> {
    fs::create_dir_all(&paths.dir).map_err(|e| ConfigError::DirectoryError(paths.dir.clone(), e))?;
    let config = Config::new(StorageConfig {
        backend,
        path: db_path.to_owned(),
    });
    config.write_to(paths.config_file())?;
    info!("Config written to {}", paths.config_file().display());
    Ok(())
}

/// Seeds an empty to-do list at `db_path` unless a database is already there.
///
/// Returns whether a new file was written.
pub fn init_database(db_path: &Path) -> Result<bool, ConfigError> {
    if db_path.exists() {
        info!("Keeping existing database {}", db_path.display());
        return Ok(false);
    }
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::DatabaseError(db_path.to_owned(), e))?;
    }
    fs::write(db_path, "[]").map_err(|e| ConfigError::DatabaseError(db_path.to_owned(), e))?;
    Ok(true)
}

pub mod testdata {
    use super::Config;

    #[allow(dead_code)]
    pub fn test_config() -> Config {
        Config::from_str(
            r#"
        app: cli-todo
        log:
            level: trace
            structured: false
        storage:
            backend: json_file
            path: /tmp/cli-todo/datastore_todo.json
        "#,
        )
        .unwrap()
    }
}
