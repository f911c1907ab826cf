//! Runtime configuration read from the environment.
//!
//! A `.env` file is honoured by the binary (loaded before `from_env`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::fs_manager::DataDir;

pub const DATABASE_URL_VAR: &str = "SURVEY_DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "SURVEY_DB_MAX_CONNECTIONS";
pub const DATA_DIR_VAR: &str = "SURVEY_DATA_DIR";
pub const STORE_TIMEOUT_VAR: &str = "SURVEY_STORE_TIMEOUT_SECS";
pub const LOG_FORMAT_VAR: &str = "SURVEY_LOG_FORMAT";

/// Value shipped in example env files; treated as "not configured".
const DATABASE_URL_PLACEHOLDER: &str = "your_database_url_here";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON lines.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    /// SQLite URL of the durable store; `None` selects the local fallback store.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub data_dir: DataDir,
    /// Upper bound on every single store call.
    pub store_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            data_dir: DataDir::default_location(),
            store_timeout: DEFAULT_STORE_TIMEOUT,
            log_format: LogFormat::default(),
        }
    }
}

impl SurveyConfig {
    /// Reads every `SURVEY_*` variable, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let database_url = env::var(DATABASE_URL_VAR)
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty() && url != DATABASE_URL_PLACEHOLDER);

        let max_connections = match read_var(MAX_CONNECTIONS_VAR) {
            Some(raw) => parse_number::<u32>(MAX_CONNECTIONS_VAR, &raw)?,
            None => defaults.max_connections,
        };
        if max_connections == 0 {
            return Err(AppError::Config(format!("{} must be at least 1", MAX_CONNECTIONS_VAR)));
        }

        let data_dir = read_var(DATA_DIR_VAR)
            .map(|dir| DataDir::new(PathBuf::from(dir)))
            .unwrap_or(defaults.data_dir);

        let store_timeout = match read_var(STORE_TIMEOUT_VAR) {
            Some(raw) => Duration::from_secs(parse_number::<u64>(STORE_TIMEOUT_VAR, &raw)?),
            None => defaults.store_timeout,
        };

        let log_format = match read_var(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            database_url,
            max_connections,
            data_dir,
            store_timeout,
            log_format,
        })
    }
}

/// A set, non-blank environment variable.
fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_number<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got '{}'", name, raw)))
}
