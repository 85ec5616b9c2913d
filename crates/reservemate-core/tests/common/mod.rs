// crates/reservemate-core/tests/common/mod.rs - Shared fixtures for integration tests

#![allow(dead_code)]

#[path = "../../src/test_support.rs"]
mod fixtures;

pub use fixtures::*;

use reservemate_core::{
    LogicManager, ModelManager, ReserveMate, SchedulePolicy, StorageManager, UserPrefs,
};
use std::path::Path;

/// A logic facade writing into `dir`
pub fn logic_in(dir: &Path, book: ReserveMate, policy: SchedulePolicy) -> LogicManager {
    let storage = StorageManager::from_paths(
        dir.join("reservemate.json"),
        dir.join("preferences.json"),
    );
    LogicManager::new(
        ModelManager::new(book, UserPrefs::default()),
        Box::new(storage),
        policy,
    )
}
