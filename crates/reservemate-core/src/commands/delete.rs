// crates/reservemate-core/src/commands/delete.rs - Delete a reservation by displayed index

use super::{CommandError, CommandOutcome, CommandResult};
use crate::index::Index;
use crate::messages::{self, MESSAGE_INVALID_RESERVATION_DISPLAYED_INDEX};
use crate::model::ModelManager;
use crate::reservation::Reservation;

pub const COMMAND_WORD: &str = "delete";

/// Literal token after the index that skips the confirmation prompt
pub const CONFIRM_TOKEN: &str = "confirm";

pub const MESSAGE_USAGE: &str = "delete: Deletes the reservation identified by the index number \
used in the displayed reservation list. Append 'confirm' to skip the confirmation prompt.\n\
Parameters: INDEX (must be a positive integer) [confirm]\n\
Example: delete 1 confirm";

/// Deletes the reservation at `target` in the filtered view
///
/// `confirmed` records whether the user already typed `confirm`. The command
/// itself deletes either way; the logic facade decides whether an
/// unconfirmed delete must be acknowledged first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target: Index,
    confirmed: bool,
}

impl DeleteCommand {
    pub fn new(target: Index, confirmed: bool) -> Self {
        Self { target, confirmed }
    }

    pub fn target(&self) -> Index {
        self.target
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn confirm(self) -> Self {
        Self {
            confirmed: true,
            ..self
        }
    }

    /// Look up the reservation the index points at, without changing anything
    pub fn resolve(&self, model: &ModelManager) -> Result<Reservation, CommandError> {
        model
            .filtered_reservations()
            .get(self.target.zero_based())
            .cloned()
            .ok_or_else(|| CommandError::new(MESSAGE_INVALID_RESERVATION_DISPLAYED_INDEX))
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let to_delete = self.resolve(model)?;

        model
            .delete_reservation(&to_delete)
            .map_err(|e| CommandError::new(e.to_string()))?;

        Ok(CommandResult::new(format!(
            "Reservation {} deleted successfully: {}",
            self.target,
            messages::format_reservation(&to_delete)
        )))
    }
}
