//! Runtime configuration for the terminal game.
//!
//! Values resolve in this order, later sources winning:
//!
//! 1. built-in defaults (4x4 board, target 2048, random seed, no log file)
//! 2. a TOML file named by `--config` or `TWENTY48_CONFIG`
//! 3. environment variables (`TWENTY48_WIDTH`, `TWENTY48_HEIGHT`,
//!    `TWENTY48_TARGET`, `TWENTY48_SEED`, `TWENTY48_LOG_PATH`)
//! 4. command-line flags
//!
//! ```toml
//! width = 5
//! height = 5
//! target = 4096
//! seed = 42
//! log_path = "tui-2048.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::core::Settings;
use crate::types::{is_valid_target, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_VALUE};

pub const ENV_CONFIG: &str = "TWENTY48_CONFIG";
pub const ENV_WIDTH: &str = "TWENTY48_WIDTH";
pub const ENV_HEIGHT: &str = "TWENTY48_HEIGHT";
pub const ENV_TARGET: &str = "TWENTY48_TARGET";
pub const ENV_SEED: &str = "TWENTY48_SEED";
pub const ENV_LOG_PATH: &str = "TWENTY48_LOG_PATH";

/// Largest accepted board side.
pub const MAX_SIDE: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub target: Cell,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target: WIN_VALUE,
            seed: None,
            log_path: None,
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub target: Option<Cell>,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    width: Option<usize>,
    #[serde(default)]
    height: Option<usize>,
    #[serde(default)]
    target: Option<Cell>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_path: Option<PathBuf>,
}

impl Config {
    /// Resolve from the process environment and `overrides`.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve(
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::default();

        let file = overrides
            .config
            .clone()
            .or_else(|| env(ENV_CONFIG).map(PathBuf::from));
        if let Some(path) = file {
            cfg.merge_file(read_file(&path)?);
        }

        if let Some(v) = env(ENV_WIDTH) {
            cfg.width = parse_value(ENV_WIDTH, &v)?;
        }
        if let Some(v) = env(ENV_HEIGHT) {
            cfg.height = parse_value(ENV_HEIGHT, &v)?;
        }
        if let Some(v) = env(ENV_TARGET) {
            cfg.target = parse_value(ENV_TARGET, &v)?;
        }
        if let Some(v) = env(ENV_SEED) {
            cfg.seed = Some(parse_value(ENV_SEED, &v)?);
        }
        if let Some(v) = env(ENV_LOG_PATH) {
            cfg.log_path = Some(PathBuf::from(v));
        }

        cfg.width = overrides.width.unwrap_or(cfg.width);
        cfg.height = overrides.height.unwrap_or(cfg.height);
        cfg.target = overrides.target.unwrap_or(cfg.target);
        cfg.seed = overrides.seed.or(cfg.seed);
        cfg.log_path = overrides.log_path.clone().or(cfg.log_path);

        cfg.validate()?;
        Ok(cfg)
    }

    fn merge_file(&mut self, file: FileConfig) {
        self.width = file.width.unwrap_or(self.width);
        self.height = file.height.unwrap_or(self.height);
        self.target = file.target.unwrap_or(self.target);
        self.seed = file.seed.or(self.seed);
        self.log_path = file.log_path.or(self.log_path.take());
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, side) in [("width", self.width), ("height", self.height)] {
            if side == 0 || side > MAX_SIDE {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 1 and {MAX_SIDE} (got {side})"
                )));
            }
        }
        if !is_valid_target(self.target) {
            return Err(ConfigError::Invalid(format!(
                "target must be a power of two >= 4 (got {})",
                self.target
            )));
        }
        Ok(())
    }

    pub fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            height: self.height,
            target: self.target,
        }
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
