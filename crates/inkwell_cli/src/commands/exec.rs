use crate::context::Context;
use anyhow::{Context as _, Result};
use inkwell_api::BlogApi;
use inkwell_core::{Caller, UserId};
use std::io::Read;
use std::process::ExitCode;

/// Runs one request and prints its envelope; request-level faults exit non-zero.
pub fn cmd_exec(context: &Context, user: Option<UserId>, request: &str) -> Result<ExitCode> {
    let body = read_request(request)?;
    let conn = context.open()?;
    let response = BlogApi::new(&conn).handle_json(Caller::from(user), &body);

    println!("{}", response.to_json_string());
    Ok(if response.is_fault() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn read_request(request: &str) -> Result<String> {
    if request != "-" {
        return Ok(request.to_string());
    }
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("failed to read request from stdin")?;
    Ok(body)
}
