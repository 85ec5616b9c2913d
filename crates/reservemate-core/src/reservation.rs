// crates/reservemate-core/src/reservation.rs - The reservation record

use indexmap::IndexSet;
use std::fmt;

use crate::field::{DateTime, Diners, Email, Name, Phone, Tag};

/// One booking: customer details, party size, time slot and occasion tags
///
/// Reservations are immutable. Editing builds a new value and swaps it in.
///
/// IDENTITY VS EQUALITY:
/// - `is_same_reservation`: name, phone and date-time match exactly
/// - `==`: every field matches, tags compared as a set
#[derive(Debug, Clone)]
pub struct Reservation {
    name: Name,
    phone: Phone,
    email: Email,
    diners: Diners,
    date_time: DateTime,
    tags: IndexSet<Tag>,
}

impl Reservation {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        diners: Diners,
        date_time: DateTime,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            diners,
            date_time,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn diners(&self) -> Diners {
        self.diners
    }

    pub fn date_time(&self) -> DateTime {
        self.date_time
    }

    /// Occasion tags in insertion order
    pub fn tags(&self) -> &IndexSet<Tag> {
        &self.tags
    }

    /// Occasion tags ordered by name, for display
    pub fn sorted_tags(&self) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self.tags.iter().collect();
        tags.sort();
        tags
    }

    /// Weaker notion of equality used to reject double bookings
    pub fn is_same_reservation(&self, other: &Reservation) -> bool {
        self.name == other.name && self.phone == other.phone && self.date_time == other.date_time
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.diners == other.diners
            && self.date_time == other.date_time
            && self.tags == other.tags
    }
}

impl Eq for Reservation {}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occasions = self
            .sorted_tags()
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        write!(
            f,
            "Reservation{{name={}, phone={}, email={}, diners={}, dateTime={}, occasions=[{}]}}",
            self.name, self.phone, self.email, self.diners, self.date_time, occasions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ReservationBuilder, alice, bob};

    #[test]
    fn test_same_reservation_ignores_email_diners_and_tags() {
        let alice = alice();
        assert!(alice.is_same_reservation(&alice));

        let edited = ReservationBuilder::from(&alice)
            .with_email("bob@example.com")
            .with_tags(&["birthday"])
            .build();
        assert!(alice.is_same_reservation(&edited));

        let edited = ReservationBuilder::from(&alice).with_diners("9").build();
        assert!(alice.is_same_reservation(&edited));
    }

    #[test]
    fn test_same_reservation_requires_name_phone_and_date_time() {
        let alice = alice();

        let edited = ReservationBuilder::from(&alice).with_name("Bob Choo").build();
        assert!(!alice.is_same_reservation(&edited));

        let edited = ReservationBuilder::from(&alice).with_phone("22222222").build();
        assert!(!alice.is_same_reservation(&edited));

        let edited = ReservationBuilder::from(&alice)
            .with_date_time("2030-01-01 1200")
            .build();
        assert!(!alice.is_same_reservation(&edited));

        // Case and trailing whitespace both count
        let bob = bob();
        let edited = ReservationBuilder::from(&bob).with_name("bob choo").build();
        assert!(!bob.is_same_reservation(&edited));

        let edited = ReservationBuilder::from(&bob).with_name("Bob Choo ").build();
        assert!(!bob.is_same_reservation(&edited));
    }

    #[test]
    fn test_equality() {
        let alice = alice();
        assert_eq!(alice, ReservationBuilder::from(&alice).build());
        assert_ne!(alice, bob());

        let edited = ReservationBuilder::from(&alice).with_email("bob@example.com").build();
        assert_ne!(alice, edited);

        let edited = ReservationBuilder::from(&alice).with_tags(&["birthday"]).build();
        assert_ne!(alice, edited);
    }

    #[test]
    fn test_tag_order_does_not_affect_equality() {
        let first = ReservationBuilder::new().with_tags(&["vip", "birthday"]).build();
        let second = ReservationBuilder::new().with_tags(&["birthday", "vip"]).build();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let reservation = ReservationBuilder::new()
            .with_tags(&["vip", "vip", "birthday"])
            .build();
        assert_eq!(reservation.tags().len(), 2);
    }

    #[test]
    fn test_display_lists_every_field() {
        let reservation = ReservationBuilder::new()
            .with_name("Amy Bee")
            .with_phone("85355255")
            .with_email("amy@gmail.com")
            .with_diners("4")
            .with_date_time("2030-12-25 1800")
            .with_tags(&["vip", "birthday"])
            .build();

        assert_eq!(
            reservation.to_string(),
            "Reservation{name=Amy Bee, phone=85355255, email=amy@gmail.com, diners=4, \
             dateTime=2030-12-25 1800, occasions=[birthday, vip]}"
        );
    }
}
