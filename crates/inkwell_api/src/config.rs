//! Runtime configuration resolved from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `INKWELL_DB_PATH` | SQLite database file | `<tmp>/inkwell.sqlite3` |
//! | `INKWELL_LOG_LEVEL` | `trace|debug|info|warn|error` | build default |
//! | `INKWELL_LOG_DIR` | absolute log directory | unset, logging off |
//!
//! Blank values count as unset.

use inkwell_core::LogLevel;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "INKWELL_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "INKWELL_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "INKWELL_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "inkwell.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub db_path: PathBuf,
    pub log_level: LogLevel,
    /// Logging stays disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl ApiConfig {
    /// Resolves configuration from process environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = read(DB_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = match read(LOG_LEVEL_VAR) {
            Some(value) => value
                .parse::<LogLevel>()
                .map_err(|err| format!("{LOG_LEVEL_VAR}: {err}"))?,
            None => LogLevel::build_default(),
        };
        let log_dir = read(LOG_DIR_VAR).map(PathBuf::from);

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }
}
