// crates/reservemate-core/src/model/manager.rs - Book, filter and preferences together

use std::path::{Path, PathBuf};

use super::{FilteredView, ModelResult, ReservationFilter, ReserveMate};
use crate::config::{GuiSettings, UserPrefs};
use crate::reservation::Reservation;

/// The in-memory state every command operates on
///
/// Owns the reservation book, the active display filter and the user
/// preferences. The filtered view is derived on each call to
/// `filtered_reservations`, so callers simply re-read it after a mutation.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    reserve_mate: ReserveMate,
    user_prefs: UserPrefs,
    filter: ReservationFilter,
}

impl ModelManager {
    pub fn new(reserve_mate: ReserveMate, user_prefs: UserPrefs) -> Self {
        tracing::debug!(
            reservations = reserve_mate.len(),
            "initializing model with reservation book"
        );

        Self {
            reserve_mate,
            user_prefs,
            filter: ReservationFilter::ShowAll,
        }
    }

    // ---- user prefs ----

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.user_prefs.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.gui_settings = gui_settings;
    }

    pub fn reserve_mate_file_path(&self) -> &Path {
        &self.user_prefs.reserve_mate_file_path
    }

    pub fn set_reserve_mate_file_path(&mut self, path: PathBuf) {
        self.user_prefs.reserve_mate_file_path = path;
    }

    // ---- reservation book ----

    pub fn reserve_mate(&self) -> &ReserveMate {
        &self.reserve_mate
    }

    pub fn set_reserve_mate(&mut self, reserve_mate: &ReserveMate) {
        self.reserve_mate.reset_data(reserve_mate);
    }

    pub fn has_reservation(&self, reservation: &Reservation) -> bool {
        self.reserve_mate.has_reservation(reservation)
    }

    pub fn add_reservation(&mut self, reservation: Reservation) -> ModelResult<()> {
        self.reserve_mate.add_reservation(reservation)?;
        self.filter = ReservationFilter::ShowAll;
        Ok(())
    }

    pub fn delete_reservation(&mut self, target: &Reservation) -> ModelResult<Reservation> {
        self.reserve_mate.remove_reservation(target)
    }

    pub fn set_reservation(&mut self, target: &Reservation, edited: Reservation) -> ModelResult<()> {
        self.reserve_mate.set_reservation(target, edited)
    }

    // ---- filtered view ----

    pub fn filter(&self) -> &ReservationFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: ReservationFilter) {
        self.filter = filter;
    }

    pub fn filtered_reservations(&self) -> FilteredView<'_> {
        FilteredView::new(self.reserve_mate.reservations(), &self.filter)
    }
}
