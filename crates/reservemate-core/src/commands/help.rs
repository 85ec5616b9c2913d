// crates/reservemate-core/src/commands/help.rs - Show usage for every command

use super::{CommandOutcome, CommandResult, add, delete, edit, find};

pub const COMMAND_WORD: &str = "help";

pub const MESSAGE_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn execute(&self) -> CommandOutcome {
        Ok(CommandResult::help(help_text()))
    }
}

/// Usage for every command, one block per verb
pub fn help_text() -> String {
    [
        add::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        edit::MESSAGE_USAGE,
        find::MESSAGE_USAGE,
        "list: Lists all reservations.",
        "clear: Deletes all reservations.",
        MESSAGE_USAGE,
        "exit: Exits the program.",
    ]
    .join("\n\n")
}
