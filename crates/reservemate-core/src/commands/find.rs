// crates/reservemate-core/src/commands/find.rs - Filter reservations by customer name

use super::{CommandOutcome, CommandResult};
use crate::messages;
use crate::model::{ModelManager, ReservationFilter};

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all reservations whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    filter: ReservationFilter,
}

impl FindCommand {
    pub fn new(filter: ReservationFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &ReservationFilter {
        &self.filter
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filter(self.filter.clone());
        let shown = model.filtered_reservations().len();
        Ok(CommandResult::new(messages::reservations_listed(shown)))
    }
}
