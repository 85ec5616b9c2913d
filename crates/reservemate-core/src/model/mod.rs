// crates/reservemate-core/src/model/mod.rs - In-memory reservation store
//
// LAYERS:
// - list:    UniqueReservationList, the ordered backing sequence with the
//            no-double-booking invariant, and ReserveMate, the book wrapping it
// - filter:  ReservationFilter predicates and the read-only FilteredView
// - manager: ModelManager, book + active filter + user preferences

mod filter;
mod list;
mod manager;

use thiserror::Error;

pub use filter::{FilteredView, ReservationFilter};
pub use list::{ReserveMate, UniqueReservationList};
pub use manager::ModelManager;

/// Store invariant violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Operation would result in duplicate reservations")]
    DuplicateReservation,

    #[error("Reservation not found in the reservation book")]
    ReservationNotFound,
}

/// Result type for store operations
pub type ModelResult<T> = Result<T, ModelError>;
