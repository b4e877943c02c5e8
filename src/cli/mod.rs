use std::process::ExitCode;

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{check::check, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = match command {
        Some(Command::Check(cmd)) => check(cmd)?,
        Some(Command::Init) => init()?,
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    };
    report::print(&result);

    Ok(ExitStatus::from_result(&result).into())
}
