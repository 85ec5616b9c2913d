// crates/reservemate-core/src/test_support.rs - Fixtures shared by unit and integration tests
//
// Integration tests mount this file through `tests/common`, so every path
// goes through the crate name.

use reservemate_core::field::{DateTime, Diners, Email, Name, Phone, Tag};
use reservemate_core::model::ReserveMate;
use reservemate_core::policy::{Clock, SchedulePolicy};
use reservemate_core::reservation::Reservation;

/// Builds reservations from raw strings, panicking on invalid input
pub struct ReservationBuilder {
    name: String,
    phone: String,
    email: String,
    diners: String,
    date_time: String,
    tags: Vec<String>,
}

impl ReservationBuilder {
    pub fn new() -> Self {
        Self {
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            diners: "5".to_string(),
            date_time: "2030-04-01 1800".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_diners(mut self, diners: &str) -> Self {
        self.diners = diners.to_string();
        self
    }

    pub fn with_date_time(mut self, date_time: &str) -> Self {
        self.date_time = date_time.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    pub fn build(self) -> Reservation {
        Reservation::new(
            Name::parse(&self.name).unwrap(),
            Phone::parse(&self.phone).unwrap(),
            Email::parse(&self.email).unwrap(),
            Diners::parse(&self.diners).unwrap(),
            DateTime::parse(&self.date_time).unwrap(),
            self.tags.iter().map(|tag| Tag::parse(tag).unwrap()),
        )
    }
}

impl Default for ReservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Reservation> for ReservationBuilder {
    fn from(reservation: &Reservation) -> Self {
        Self {
            name: reservation.name().to_string(),
            phone: reservation.phone().to_string(),
            email: reservation.email().to_string(),
            diners: reservation.diners().to_string(),
            date_time: reservation.date_time().to_string(),
            tags: reservation
                .tags()
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
        }
    }
}

pub fn alice() -> Reservation {
    ReservationBuilder::new()
        .with_name("Alice Pauline")
        .with_phone("94351253")
        .with_email("alice@example.com")
        .with_diners("2")
        .with_date_time("2030-01-15 1900")
        .with_tags(&["anniversary"])
        .build()
}

pub fn bob() -> Reservation {
    ReservationBuilder::new()
        .with_name("Bob Choo")
        .with_phone("98765432")
        .with_email("bob@example.com")
        .with_diners("4")
        .with_date_time("2030-02-20 1230")
        .with_tags(&["birthday", "vip"])
        .build()
}

pub fn carl() -> Reservation {
    ReservationBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_diners("6")
        .with_date_time("2030-03-03 2000")
        .build()
}

pub fn daniel() -> Reservation {
    ReservationBuilder::new()
        .with_name("Daniel Meier")
        .with_phone("87652533")
        .with_email("cornelia@example.com")
        .with_diners("3")
        .with_date_time("2030-03-10 1800")
        .with_tags(&["business"])
        .build()
}

pub fn typical_reservations() -> Vec<Reservation> {
    vec![alice(), bob(), carl(), daniel()]
}

pub fn typical_reserve_mate() -> ReserveMate {
    let mut book = ReserveMate::new();
    for reservation in typical_reservations() {
        book.add_reservation(reservation).unwrap();
    }
    book
}

/// Rejects past bookings, with "now" frozen at 2025-01-01 00:00
pub fn fixed_policy() -> SchedulePolicy {
    SchedulePolicy::new(
        true,
        Clock::Fixed(DateTime::parse("2025-01-01 0000").unwrap().value()),
    )
}
