// crates/reservemate-core/src/commands/edit.rs - Edit fields of an existing reservation

use indexmap::IndexSet;

use super::{CommandError, CommandOutcome, CommandResult};
use crate::field::{DateTime, Diners, Email, Name, Phone, Tag};
use crate::index::Index;
use crate::messages::{
    self, MESSAGE_DUPLICATE_RESERVATION, MESSAGE_INVALID_RESERVATION_DISPLAYED_INDEX,
    MESSAGE_PAST_DATE_TIME,
};
use crate::model::{ModelManager, ReservationFilter};
use crate::policy::SchedulePolicy;
use crate::reservation::Reservation;

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the reservation identified \
by the index number used in the displayed reservation list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) \
[n/NAME] [p/PHONE] [e/EMAIL] [d/DINERS] [t/DATE_TIME] [o/OCCASION]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_NO_CHANGES: &str = "No changes detected. The reservation is already up to date.";

/// Fields to overwrite; `None` keeps the current value
///
/// `tags: Some(empty)` clears every occasion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReservationDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub diners: Option<Diners>,
    pub date_time: Option<DateTime>,
    pub tags: Option<IndexSet<Tag>>,
}

impl EditReservationDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.diners.is_some()
            || self.date_time.is_some()
            || self.tags.is_some()
    }

    /// Overlay the supplied fields onto `original`
    pub fn apply_to(&self, original: &Reservation) -> Reservation {
        Reservation::new(
            self.name.clone().unwrap_or_else(|| original.name().clone()),
            self.phone.clone().unwrap_or_else(|| original.phone().clone()),
            self.email.clone().unwrap_or_else(|| original.email().clone()),
            self.diners.unwrap_or_else(|| original.diners()),
            self.date_time.unwrap_or_else(|| original.date_time()),
            self.tags.clone().unwrap_or_else(|| original.tags().clone()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditReservationDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditReservationDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditReservationDescriptor {
        &self.descriptor
    }

    pub fn execute(&self, model: &mut ModelManager, policy: &SchedulePolicy) -> CommandOutcome {
        let to_edit = model
            .filtered_reservations()
            .get(self.index.zero_based())
            .cloned()
            .ok_or_else(|| CommandError::new(MESSAGE_INVALID_RESERVATION_DISPLAYED_INDEX))?;

        let edited = self.descriptor.apply_to(&to_edit);
        if edited == to_edit {
            return Err(CommandError::new(MESSAGE_NO_CHANGES));
        }

        if let Some(date_time) = &self.descriptor.date_time {
            if !policy.allows(date_time) {
                return Err(CommandError::new(MESSAGE_PAST_DATE_TIME));
            }
        }

        if !to_edit.is_same_reservation(&edited) && model.has_reservation(&edited) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_RESERVATION));
        }

        model
            .set_reservation(&to_edit, edited.clone())
            .map_err(|_| CommandError::new(MESSAGE_DUPLICATE_RESERVATION))?;
        model.update_filter(ReservationFilter::ShowAll);

        Ok(CommandResult::new(format!(
            "Edited Reservation: {}",
            messages::format_reservation(&edited)
        )))
    }
}
