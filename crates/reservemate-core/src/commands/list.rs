// crates/reservemate-core/src/commands/list.rs - Show every reservation

use super::{CommandOutcome, CommandResult};
use crate::model::{ModelManager, ReservationFilter};

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_SUCCESS: &str = "Listed all reservations";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filter(ReservationFilter::ShowAll);
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}
