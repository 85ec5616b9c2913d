// crates/reservemate-core/src/lib.rs - ReserveMate core library
//
// Everything except the terminal front end lives here.
//
// MODULE ORGANIZATION:
// - field, reservation: validated values and the reservation entity
// - model: the reservation book, filter and in-memory state
// - parser, commands: text grammar and the commands it produces
// - storage, config: JSON persistence and settings
// - policy: booking-time rules
// - logic: the facade hosts talk to
// - messages, sample: user-facing strings and first-run data

pub mod commands;
pub mod config;
pub mod field;
pub mod index;
pub mod logic;
pub mod messages;
pub mod model;
pub mod parser;
pub mod policy;
pub mod reservation;
pub mod sample;
pub mod storage;

#[cfg(test)]
extern crate self as reservemate_core;

#[cfg(test)]
mod test_support;

pub use commands::{Command, CommandError, CommandResult};
pub use config::{AppConfig, ConfigError, ConfigManager, GuiSettings, UserPrefs};
pub use field::{DateTime, Diners, Email, FieldFormatError, Name, Phone, Tag};
pub use index::Index;
pub use logic::{LogicError, LogicManager, LogicResult};
pub use model::{ModelManager, ReservationFilter, ReserveMate};
pub use parser::{ParseError, ReserveMateParser};
pub use policy::{Clock, SchedulePolicy};
pub use reservation::Reservation;
pub use storage::{
    DataLoadingError, JsonReserveMateStorage, JsonUserPrefsStorage, ReserveMateStorage, Storage,
    StorageManager, UserPrefsStorage,
};
