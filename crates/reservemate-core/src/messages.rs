// crates/reservemate-core/src/messages.rs - Fixed user-facing strings

use crate::reservation::Reservation;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_INVALID_RESERVATION_DISPLAYED_INDEX: &str =
    "The reservation index provided is invalid";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_DUPLICATE_RESERVATION: &str =
    "This reservation already exists in the reservation book";
pub const MESSAGE_PAST_DATE_TIME: &str = "Reservation date-time cannot be in the past.";

/// "{n} reservations listed!"
pub fn reservations_listed(count: usize) -> String {
    format!("{count} reservations listed!")
}

/// One-line summary of a reservation for feedback messages
pub fn format_reservation(reservation: &Reservation) -> String {
    let occasions: String = reservation
        .sorted_tags()
        .iter()
        .map(|tag| format!("[{tag}]"))
        .collect();

    format!(
        "{}; Phone: {}; Email: {}; Diners: {}; Date-time: {}; Occasions: {}",
        reservation.name(),
        reservation.phone(),
        reservation.email(),
        reservation.diners(),
        reservation.date_time(),
        occasions
    )
}
