// crates/reservemate-core/src/commands/add.rs - Add a reservation

use super::{CommandError, CommandOutcome, CommandResult};
use crate::messages::{self, MESSAGE_DUPLICATE_RESERVATION, MESSAGE_PAST_DATE_TIME};
use crate::model::ModelManager;
use crate::policy::SchedulePolicy;
use crate::reservation::Reservation;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a reservation to the reservation book. \
Parameters: n/NAME p/PHONE e/EMAIL d/DINERS t/DATE_TIME [o/OCCASION]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com d/4 t/2030-12-25 1800 o/birthday o/vip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Reservation,
}

impl AddCommand {
    pub fn new(to_add: Reservation) -> Self {
        Self { to_add }
    }

    pub fn reservation(&self) -> &Reservation {
        &self.to_add
    }

    pub fn execute(&self, model: &mut ModelManager, policy: &SchedulePolicy) -> CommandOutcome {
        if !policy.allows(&self.to_add.date_time()) {
            return Err(CommandError::new(MESSAGE_PAST_DATE_TIME));
        }

        if model.has_reservation(&self.to_add) {
            return Err(CommandError::new(MESSAGE_DUPLICATE_RESERVATION));
        }

        model
            .add_reservation(self.to_add.clone())
            .map_err(|_| CommandError::new(MESSAGE_DUPLICATE_RESERVATION))?;

        Ok(CommandResult::new(format!(
            "New reservation added: {}",
            messages::format_reservation(&self.to_add)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserPrefs;
    use crate::model::ReserveMate;
    use crate::test_support::{ReservationBuilder, alice, fixed_policy, typical_reserve_mate};

    #[test]
    fn test_add_success() {
        let mut model = ModelManager::default();
        let reservation = ReservationBuilder::new().build();

        let result = AddCommand::new(reservation.clone())
            .execute(&mut model, &fixed_policy())
            .unwrap();

        assert_eq!(
            result.feedback_to_user,
            format!(
                "New reservation added: {}",
                messages::format_reservation(&reservation)
            )
        );
        assert_eq!(model.reserve_mate().reservations(), &[reservation]);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut model = ModelManager::new(typical_reserve_mate(), UserPrefs::default());
        let same = ReservationBuilder::from(&alice()).with_email("z@example.com").build();

        let err = AddCommand::new(same)
            .execute(&mut model, &fixed_policy())
            .unwrap_err();

        assert_eq!(err.message(), MESSAGE_DUPLICATE_RESERVATION);
        assert_eq!(model.reserve_mate(), &typical_reserve_mate());
    }

    #[test]
    fn test_add_past_date_time_follows_policy() {
        let past = ReservationBuilder::new().with_date_time("2020-01-01 1200").build();

        let mut model = ModelManager::default();
        let err = AddCommand::new(past.clone())
            .execute(&mut model, &fixed_policy())
            .unwrap_err();
        assert_eq!(err.message(), MESSAGE_PAST_DATE_TIME);
        assert_eq!(model.reserve_mate(), &ReserveMate::new());

        let permissive = SchedulePolicy::permissive();
        assert!(AddCommand::new(past).execute(&mut model, &permissive).is_ok());
        assert_eq!(model.reserve_mate().len(), 1);
    }
}
