// crates/reservemate-core/src/model/list.rs - Ordered reservation storage

use super::{ModelError, ModelResult};
use crate::reservation::Reservation;

/// Ordered list of reservations in which no two entries are the same reservation
///
/// Insertion order is what the user sees, so every operation keeps positions
/// stable. Entries are compared with `Reservation::is_same_reservation` for
/// uniqueness and with `==` when locating a specific entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueReservationList {
    reservations: Vec<Reservation>,
}

impl UniqueReservationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an equivalent (same reservation) entry is present
    pub fn contains(&self, candidate: &Reservation) -> bool {
        self.reservations
            .iter()
            .any(|existing| existing.is_same_reservation(candidate))
    }

    pub fn add(&mut self, reservation: Reservation) -> ModelResult<()> {
        if self.contains(&reservation) {
            return Err(ModelError::DuplicateReservation);
        }
        self.reservations.push(reservation);
        Ok(())
    }

    /// Replace `target` with `edited`, keeping its position
    pub fn set_reservation(&mut self, target: &Reservation, edited: Reservation) -> ModelResult<()> {
        let position = self.position_of(target)?;

        let collides = self
            .reservations
            .iter()
            .enumerate()
            .any(|(i, existing)| i != position && existing.is_same_reservation(&edited));
        if collides {
            return Err(ModelError::DuplicateReservation);
        }

        self.reservations[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Reservation) -> ModelResult<Reservation> {
        let position = self.position_of(target)?;
        Ok(self.reservations.remove(position))
    }

    /// Replace the whole list, rejecting input that contains double bookings
    pub fn set_reservations(&mut self, reservations: Vec<Reservation>) -> ModelResult<()> {
        if !reservations_are_unique(&reservations) {
            return Err(ModelError::DuplicateReservation);
        }
        self.reservations = reservations;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    fn position_of(&self, target: &Reservation) -> ModelResult<usize> {
        self.reservations
            .iter()
            .position(|existing| existing == target)
            .ok_or(ModelError::ReservationNotFound)
    }
}

fn reservations_are_unique(reservations: &[Reservation]) -> bool {
    reservations.iter().enumerate().all(|(i, first)| {
        reservations[i + 1..]
            .iter()
            .all(|second| !first.is_same_reservation(second))
    })
}

/// The reservation book: everything that gets persisted to the data file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveMate {
    reservations: UniqueReservationList,
}

impl ReserveMate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from an arbitrary list, failing on double bookings
    pub fn from_reservations(reservations: Vec<Reservation>) -> ModelResult<Self> {
        let mut book = Self::new();
        book.reservations.set_reservations(reservations)?;
        Ok(book)
    }

    pub fn has_reservation(&self, reservation: &Reservation) -> bool {
        self.reservations.contains(reservation)
    }

    pub fn add_reservation(&mut self, reservation: Reservation) -> ModelResult<()> {
        self.reservations.add(reservation)
    }

    pub fn set_reservation(&mut self, target: &Reservation, edited: Reservation) -> ModelResult<()> {
        self.reservations.set_reservation(target, edited)
    }

    pub fn remove_reservation(&mut self, target: &Reservation) -> ModelResult<Reservation> {
        self.reservations.remove(target)
    }

    /// Replace all contents with those of `other`
    pub fn reset_data(&mut self, other: &ReserveMate) {
        self.reservations = other.reservations.clone();
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.reservations.as_slice()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ReservationBuilder, alice, bob, carl, typical_reserve_mate};

    #[test]
    fn test_add_rejects_same_reservation() {
        let mut list = UniqueReservationList::new();
        list.add(alice()).unwrap();

        let same_slot = ReservationBuilder::from(&alice())
            .with_email("other@example.com")
            .with_tags(&["vip"])
            .build();
        assert_eq!(list.add(same_slot), Err(ModelError::DuplicateReservation));
        assert_eq!(list.as_slice(), &[alice()]);
    }

    #[test]
    fn test_set_reservation_keeps_position() {
        let mut list = UniqueReservationList::new();
        list.add(alice()).unwrap();
        list.add(bob()).unwrap();
        list.add(carl()).unwrap();

        let edited_bob = ReservationBuilder::from(&bob()).with_diners("8").build();
        list.set_reservation(&bob(), edited_bob.clone()).unwrap();

        assert_eq!(list.as_slice(), &[alice(), edited_bob, carl()]);
    }

    #[test]
    fn test_set_reservation_to_itself_with_changes_is_allowed() {
        let mut list = UniqueReservationList::new();
        list.add(alice()).unwrap();

        // Same identity as the target is fine; only other entries count
        let edited = ReservationBuilder::from(&alice()).with_email("new@example.com").build();
        assert!(list.set_reservation(&alice(), edited).is_ok());
    }

    #[test]
    fn test_set_reservation_rejects_collision_with_other_entry() {
        let mut list = UniqueReservationList::new();
        list.add(alice()).unwrap();
        list.add(bob()).unwrap();

        let alice_as_bob = ReservationBuilder::from(&bob()).with_email("x@example.com").build();
        assert_eq!(
            list.set_reservation(&alice(), alice_as_bob),
            Err(ModelError::DuplicateReservation)
        );
        assert_eq!(list.as_slice(), &[alice(), bob()]);
    }

    #[test]
    fn test_set_and_remove_missing_target() {
        let mut list = UniqueReservationList::new();
        list.add(alice()).unwrap();

        assert_eq!(list.set_reservation(&bob(), carl()), Err(ModelError::ReservationNotFound));
        assert_eq!(list.remove(&bob()), Err(ModelError::ReservationNotFound));
    }

    #[test]
    fn test_set_reservations_rejects_duplicates() {
        let mut list = UniqueReservationList::new();
        let result = list.set_reservations(vec![alice(), bob(), alice()]);
        assert_eq!(result, Err(ModelError::DuplicateReservation));
        assert!(list.is_empty());
    }

    #[test]
    fn test_reserve_mate_reset_data() {
        let mut book = ReserveMate::new();
        book.reset_data(&typical_reserve_mate());
        assert_eq!(book, typical_reserve_mate());
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn test_reserve_mate_remove() {
        let mut book = typical_reserve_mate();
        let removed = book.remove_reservation(&alice()).unwrap();
        assert_eq!(removed, alice());
        assert!(!book.has_reservation(&alice()));
        assert_eq!(book.reservations()[0], bob());
    }
}
