// crates/reservemate-core/src/sample.rs - Seed data for a first run

use crate::field::{DateTime, Diners, Email, FieldResult, Name, Phone, Tag};
use crate::model::ReserveMate;
use crate::reservation::Reservation;

const SAMPLE_RESERVATIONS: [(&str, &str, &str, &str, &str, &[&str]); 6] = [
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "2", "2030-01-10 1800", &["birthday"]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "4", "2030-01-12 1930", &["anniversary", "vip"]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "3", "2030-01-15 1200", &[]),
    ("David Li", "91031282", "lidavid@example.com", "6", "2030-02-01 2000", &["business"]),
    ("Irfan Ibrahim", "92492021", "irfan@example.com", "1", "2030-02-14 1900", &[]),
    ("Roy Balakrishnan", "92624417", "royb@example.com", "8", "2030-03-03 1830", &["graduation"]),
];

/// Reservations shown the first time the application starts
pub fn sample_reservations() -> FieldResult<Vec<Reservation>> {
    SAMPLE_RESERVATIONS
        .iter()
        .map(|(name, phone, email, diners, date_time, tags)| {
            Ok(Reservation::new(
                Name::parse(name)?,
                Phone::parse(phone)?,
                Email::parse(email)?,
                Diners::parse(diners)?,
                DateTime::parse(date_time)?,
                tags.iter().map(Tag::parse).collect::<FieldResult<Vec<_>>>()?,
            ))
        })
        .collect()
}

/// A reservation book pre-filled with `sample_reservations`
pub fn sample_reserve_mate() -> ReserveMate {
    let reservations = match sample_reservations() {
        Ok(reservations) => reservations,
        Err(e) => {
            tracing::warn!(error = %e, "sample data failed validation");
            return ReserveMate::new();
        }
    };

    ReserveMate::from_reservations(reservations).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "sample data contains duplicates");
        ReserveMate::new()
    })
}
