use crate::context::Context;
use anyhow::Result;
use inkwell_core::db::migrations::current_user_version;
use std::process::ExitCode;

pub fn cmd_migrate(context: &Context) -> Result<ExitCode> {
    let conn = context.open()?;
    println!(
        "{} schema_version={}",
        context.config.db_path.display(),
        current_user_version(&conn)?
    );
    Ok(ExitCode::SUCCESS)
}
