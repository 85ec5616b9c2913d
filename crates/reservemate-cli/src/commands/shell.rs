// crates/reservemate-cli/src/commands/shell.rs - Interactive session
//
// SESSION LOOP:
// 1. Read a line (prompt "> ")
// 2. Run it through the logic facade
// 3. For an unconfirmed delete, ask y/n and answer the pending command
// 4. Print the feedback, then the current filtered list on success
// 5. Stop on `exit` or end of input; save preferences

use anyhow::Result;
use console::style;

use reservemate_core::{CommandResult, LogicResult};

use super::exec::run_line;
use crate::context::Context;
use crate::{render, stdin};

const PROMPT: &str = "> ";

pub fn run(ctx: &mut Context) -> Result<()> {
    if let Err(e) = ctx.ensure_config_file() {
        tracing::warn!(error = %e, "config file could not be written");
    }

    println!(
        "{} {}",
        style("ReserveMate").bold(),
        style(format!(
            "({} reservations, data in {})",
            ctx.logic().reserve_mate().len(),
            ctx.logic().reserve_mate_file_path().display()
        ))
        .dim()
    );
    if !ctx.rejects_past() {
        println!("{}", style("Past date-times are accepted.").dim());
    }
    println!("{}", render::reservation_list(ctx.logic().filtered_reservations().iter()));

    while let Some(line) = stdin::read_line(PROMPT)? {
        if line.trim().is_empty() {
            continue;
        }

        let outcome = run_line(ctx, &line)?;
        if report(ctx, outcome) {
            break;
        }
    }

    ctx.shutdown()
}

/// Print the outcome; `true` when the session should end
fn report(ctx: &Context, outcome: LogicResult<CommandResult>) -> bool {
    match outcome {
        Ok(result) => {
            println!("{}", render::success(&result.feedback_to_user));
            if result.exit {
                return true;
            }
            if !result.show_help {
                println!(
                    "{}",
                    render::reservation_list(ctx.logic().filtered_reservations().iter())
                );
            }
            false
        }
        Err(e) => {
            eprintln!("{}", render::failure(&e.to_string()));
            false
        }
    }
}
