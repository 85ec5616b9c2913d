// crates/reservemate-cli/src/commands/exec.rs - Run a single command line
use anyhow::Result;

use reservemate_core::{CommandResult, LogicResult};

use crate::context::Context;
use crate::{render, stdin};

const CONFIRM_PROMPT: &str = "(y/n) ";

/// Run `words` as one command line
///
/// An unconfirmed delete reads its answer from stdin. Failures are printed
/// to stderr and end the process with status 1.
pub fn handle(ctx: &mut Context, words: &[String]) -> Result<()> {
    match run_line(ctx, &words.join(" "))? {
        Ok(result) => {
            println!("{}", render::success(&result.feedback_to_user));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", render::failure(&e.to_string()));
            std::process::exit(1);
        }
    }
}

/// Execute `line`, asking on stdin when a delete needs confirming
pub fn run_line(ctx: &mut Context, line: &str) -> Result<LogicResult<CommandResult>> {
    let logic = ctx.logic_mut();

    let mut outcome = logic.execute(line);
    if let Ok(result) = &outcome {
        if result.awaiting_confirmation {
            println!("{}", result.feedback_to_user);
            let confirmed = stdin::read_confirmation(CONFIRM_PROMPT)?;
            outcome = logic.confirm_pending(confirmed);
        }
    }

    Ok(outcome)
}
