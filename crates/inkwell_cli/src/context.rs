use anyhow::{anyhow, Context as _, Result};
use inkwell_api::ApiConfig;
use inkwell_core::db::open_db;
use inkwell_core::{init_logging, LogLevel};
use rusqlite::Connection;
use std::path::PathBuf;

/// Effective settings: command-line flags layered over the environment.
#[derive(Debug)]
pub struct Context {
    pub config: ApiConfig,
}

impl Context {
    pub fn resolve(
        db: Option<PathBuf>,
        log_level: Option<LogLevel>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let env = ApiConfig::from_env().map_err(|err| anyhow!(err))?;
        Ok(Self::layered(env, db, log_level, log_dir))
    }

    fn layered(
        env: ApiConfig,
        db: Option<PathBuf>,
        log_level: Option<LogLevel>,
        log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            config: ApiConfig {
                db_path: db.unwrap_or(env.db_path),
                log_level: log_level.unwrap_or(env.log_level),
                log_dir: log_dir.or(env.log_dir),
            },
        }
    }

    /// Starts file logging when a log directory is configured.
    pub fn init_logging(&self) -> Result<()> {
        let Some(log_dir) = &self.config.log_dir else {
            return Ok(());
        };
        init_logging(
            self.config.log_level.as_str(),
            &log_dir.to_string_lossy(),
        )
        .map_err(|err| anyhow!(err))
    }

    pub fn open(&self) -> Result<Connection> {
        open_db(&self.config.db_path).with_context(|| {
            format!("failed to open database {}", self.config.db_path.display())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use inkwell_api::ApiConfig;
    use inkwell_core::LogLevel;
    use std::path::PathBuf;

    fn env_config() -> ApiConfig {
        ApiConfig {
            db_path: PathBuf::from("/var/lib/inkwell/env.sqlite3"),
            log_level: LogLevel::Info,
            log_dir: Some(PathBuf::from("/var/log/inkwell")),
        }
    }

    #[test]
    fn flags_override_environment() {
        let context = Context::layered(
            env_config(),
            Some(PathBuf::from("/tmp/flag.sqlite3")),
            Some(LogLevel::Trace),
            None,
        );
        assert_eq!(context.config.db_path, PathBuf::from("/tmp/flag.sqlite3"));
        assert_eq!(context.config.log_level, LogLevel::Trace);
        assert_eq!(
            context.config.log_dir,
            Some(PathBuf::from("/var/log/inkwell"))
        );
    }

    #[test]
    fn open_creates_and_migrates_the_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = env_config();
        config.log_dir = None;
        let context = Context::layered(config, Some(dir.path().join("cli.sqlite3")), None, None);

        context.init_logging().unwrap();
        let conn = context.open().unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'posts';",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }
}
