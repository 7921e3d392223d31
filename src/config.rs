use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use crate::constants;
use crate::error::{ConvertError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub files: FilesConfig,
    pub columns: ColumnsConfig,
    pub transform: TransformConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(constants::DEFAULT_INPUT_FILE),
            output: PathBuf::from(constants::DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Header text for each field, plus an optional sheet name (first sheet when unset)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    pub sheet: Option<String>,
    pub street_number: String,
    pub street_name: String,
    pub score: String,
    pub grade: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            sheet: None,
            street_number: constants::STREET_NUMBER_HEADER.to_string(),
            street_name: constants::STREET_NAME_HEADER.to_string(),
            score: constants::SCORE_HEADER.to_string(),
            grade: constants::GRADE_HEADER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub normalize_scope: NormalizeScope,
    pub sentinel_match: SentinelMatch,
}

/// JSON log files are only written when `dir` is set
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: Option<PathBuf>,
}

/// Which part of the address the ordinal normalizer rewrites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeScope {
    #[default]
    StreetName,
    Address,
}

/// How score cells are compared against the source's missing-data text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelMatch {
    #[default]
    Exact,
    /// Case-insensitive, with whitespace runs collapsed
    Relaxed,
}

impl Config {
    /// Load configuration from `path`. A missing default config file yields defaults;
    /// a missing explicitly requested file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(constants::DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConvertError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply command line overrides on top of the loaded file
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        sheet: Option<String>,
    ) -> Self {
        if let Some(input) = input {
            self.files.input = input;
        }
        if let Some(output) = output {
            self.files.output = output;
        }
        if sheet.is_some() {
            self.columns.sheet = sheet;
        }
        self
    }

    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.logging.dir = dir;
        }
        self
    }
}
