use crate::context::Context;
use anyhow::Result;
use inkwell_core::{SqliteUserRepository, UserId, UserService};
use log::info;
use std::process::ExitCode;

pub fn cmd_create_user(context: &Context, username: &str) -> Result<ExitCode> {
    let conn = context.open()?;
    let users = UserService::new(SqliteUserRepository::try_new(&conn)?);

    match users.create_user(username) {
        Ok(user) => {
            info!(
                "event=user_create module=cli status=ok user_id={}",
                user.id
            );
            println!("{}", serde_json::to_string(&user)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_validation() => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn cmd_delete_user(context: &Context, id: UserId) -> Result<ExitCode> {
    let conn = context.open()?;
    let users = UserService::new(SqliteUserRepository::try_new(&conn)?);

    match users.delete_user(id) {
        Ok(_) => {
            info!("event=user_delete module=cli status=ok user_id={id}");
            println!("deleted user {id}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_validation() => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
