// crates/reservemate-core/src/commands/clear.rs - Remove every reservation

use super::{CommandOutcome, CommandResult};
use crate::model::{ModelManager, ReserveMate};

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_SUCCESS: &str = "All reservations have been cleared!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.set_reserve_mate(&ReserveMate::new());
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}
