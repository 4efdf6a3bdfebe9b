//! Inkwell command-line entry point.
//!
//! # Responsibility
//! - Provision and remove users, which the request surface cannot do.
//! - Execute one JSON operation request and print the response envelope.

use anyhow::Result;
use clap::{Parser, Subcommand};
use inkwell_core::{LogLevel, UserId};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;
use commands::{cmd_create_user, cmd_delete_user, cmd_exec, cmd_migrate};
use context::Context;

/// inkwell command-line interface.
#[derive(Parser, Debug)]
#[command(name = "inkwell", version, about)]
struct Cli {
    /// SQLite database file (overrides INKWELL_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Log verbosity (overrides INKWELL_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Absolute log directory (overrides INKWELL_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Apply pending schema migrations and print the schema version.
    Migrate,
    /// Create a login identity.
    CreateUser { username: String },
    /// Delete a user together with their authors, posts and comments.
    DeleteUser { id: UserId },
    /// Execute one `{"operation", "arguments"}` request.
    Exec {
        /// Act as this user; anonymous when omitted.
        #[arg(short, long)]
        user: Option<UserId>,
        /// Request JSON, or `-` to read it from stdin.
        request: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let context = Context::resolve(cli.db, cli.log_level, cli.log_dir)?;
    context.init_logging()?;

    match cli.command {
        Commands::Migrate => cmd_migrate(&context),
        Commands::CreateUser { username } => cmd_create_user(&context, &username),
        Commands::DeleteUser { id } => cmd_delete_user(&context, id),
        Commands::Exec { user, request } => cmd_exec(&context, user, &request),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;
    use inkwell_core::LogLevel;
    use std::path::PathBuf;

    #[test]
    fn parses_exec_with_user_and_global_flags() {
        let cli = Cli::try_parse_from([
            "inkwell",
            "exec",
            "--user",
            "7",
            r#"{"operation":"allPosts"}"#,
            "--db",
            "/tmp/blog.sqlite3",
            "--log-level",
            "warn",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("/tmp/blog.sqlite3")));
        assert_eq!(cli.log_level, Some(LogLevel::Warn));
        assert_eq!(
            cli.command,
            Commands::Exec {
                user: Some(7),
                request: r#"{"operation":"allPosts"}"#.to_string(),
            }
        );
    }

    #[test]
    fn exec_defaults_to_anonymous() {
        let cli = Cli::try_parse_from(["inkwell", "exec", "-"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Exec {
                user: None,
                request: "-".to_string(),
            }
        );
    }

    #[test]
    fn rejects_unknown_log_level_and_missing_username() {
        assert!(Cli::try_parse_from(["inkwell", "--log-level", "loud", "migrate"]).is_err());
        assert!(Cli::try_parse_from(["inkwell", "create-user"]).is_err());
        assert!(Cli::try_parse_from(["inkwell", "delete-user", "abc"]).is_err());
    }
}
