// crates/reservemate-core/tests/logic_manager.rs - End-to-end runs through the logic facade

mod common;

use common::{alice, bob, carl, daniel, fixed_policy, logic_in, typical_reserve_mate};
use reservemate_core::commands::exit::MESSAGE_EXIT_ACKNOWLEDGEMENT;
use reservemate_core::messages::{
    MESSAGE_DUPLICATE_RESERVATION, MESSAGE_PAST_DATE_TIME, format_reservation,
};
use reservemate_core::{ReserveMate, ReserveMateStorage, SchedulePolicy, StorageManager};
use tempfile::TempDir;

#[test]
fn test_add_delete_exit_session() {
    let dir = TempDir::new().unwrap();
    let mut logic = logic_in(dir.path(), ReserveMate::new(), SchedulePolicy::permissive());

    let added = logic
        .execute("add n/Amy p/12345 e/amy@example.com d/4 t/2024-12-25 1800")
        .unwrap();
    assert!(added.feedback_to_user.starts_with("New reservation added: Amy;"));
    assert_eq!(logic.filtered_reservations().len(), 1);

    let deleted = logic.execute("delete 1 confirm").unwrap();
    assert!(deleted.feedback_to_user.starts_with("Reservation 1 deleted successfully: Amy;"));
    assert_eq!(logic.filtered_reservations().len(), 0);

    let exit = logic.execute("exit").unwrap();
    assert!(exit.exit);
    assert_eq!(exit.feedback_to_user, MESSAGE_EXIT_ACKNOWLEDGEMENT);
}

#[test]
fn test_past_date_time_rejected_when_policy_on() {
    let dir = TempDir::new().unwrap();
    let mut logic = logic_in(dir.path(), ReserveMate::new(), fixed_policy());

    let err = logic
        .execute("add n/Amy p/12345 e/amy@example.com d/4 t/2024-12-25 1800")
        .unwrap_err();
    assert_eq!(err.to_string(), MESSAGE_PAST_DATE_TIME);
    assert!(logic.reserve_mate().is_empty());
}

#[test]
fn test_find_then_delete_resolves_against_filtered_view() {
    let dir = TempDir::new().unwrap();
    let mut logic = logic_in(dir.path(), typical_reserve_mate(), fixed_policy());

    let found = logic.execute("find bob").unwrap();
    assert_eq!(found.feedback_to_user, "1 reservations listed!");
    assert_eq!(logic.filtered_reservations().get(0), Some(&bob()));

    logic.execute("delete 1 confirm").unwrap();
    assert_eq!(logic.reserve_mate().reservations(), &[alice(), carl(), daniel()]);
}

#[test]
fn test_find_with_no_match_lists_zero() {
    let dir = TempDir::new().unwrap();
    let mut logic = logic_in(dir.path(), typical_reserve_mate(), fixed_policy());

    let found = logic.execute("find foo bar").unwrap();
    assert_eq!(found.feedback_to_user, "0 reservations listed!");
    assert!(logic.filtered_reservations().is_empty());
    assert_eq!(logic.reserve_mate().len(), 4);
}

#[test]
fn test_duplicate_add_leaves_book_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut logic = logic_in(dir.path(), typical_reserve_mate(), fixed_policy());

    // Same name, phone and date-time as Alice; other fields differ
    let err = logic
        .execute("add n/Alice Pauline p/94351253 e/other@example.com d/9 t/2030-01-15 1900")
        .unwrap_err();
    assert_eq!(err.to_string(), MESSAGE_DUPLICATE_RESERVATION);
    assert_eq!(logic.reserve_mate(), &typical_reserve_mate());
}

#[test]
fn test_edit_persists_and_shows_all() {
    let dir = TempDir::new().unwrap();
    let mut logic = logic_in(dir.path(), typical_reserve_mate(), fixed_policy());

    logic.execute("find alice").unwrap();
    let result = logic.execute("edit 1 d/7 o/").unwrap();

    let edited = &logic.reserve_mate().reservations()[0];
    assert_eq!(edited.diners().count(), 7);
    assert!(edited.tags().is_empty());
    assert_eq!(
        result.feedback_to_user,
        format!("Edited Reservation: {}", format_reservation(edited))
    );
    assert_eq!(logic.filtered_reservations().len(), 4);

    let stored = StorageManager::from_paths(dir.path().join("reservemate.json"), "unused.json")
        .read_reserve_mate()
        .unwrap()
        .unwrap();
    assert_eq!(&stored, logic.reserve_mate());
}

#[test]
fn test_unconfirmed_delete_then_yes() {
    let dir = TempDir::new().unwrap();
    let mut logic = logic_in(dir.path(), typical_reserve_mate(), fixed_policy());

    let prompt = logic.execute("delete 2").unwrap();
    assert!(prompt.awaiting_confirmation);
    assert_eq!(logic.reserve_mate().len(), 4);

    logic.confirm_pending(true).unwrap();
    assert_eq!(logic.reserve_mate().reservations(), &[alice(), carl(), daniel()]);
}
