// crates/reservemate-core/src/commands/exit.rs - Ask the host to shut down

use super::{CommandOutcome, CommandResult};

pub const COMMAND_WORD: &str = "exit";

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting ReserveMate as requested ...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn execute(&self) -> CommandOutcome {
        Ok(CommandResult::exiting(MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}
