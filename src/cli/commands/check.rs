use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::finish};
use crate::{cli::args::CheckCommand, core::CheckContext};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let issues = ctx.check();

    Ok(finish(
        CommandSummary::Check,
        issues,
        ctx.files.len(),
        cmd.format,
    ))
}
