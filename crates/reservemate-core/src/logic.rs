// crates/reservemate-core/src/logic.rs - Entry point for running user input
//
// LogicManager ties the parser, the model and storage together:
//   raw line -> ReserveMateParser -> Command -> ModelManager -> save
//
// It also owns the confirmation step for deletes. A `delete` without the
// `confirm` token is parked as pending and only runs once the host answers
// through `confirm_pending`.

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::commands::{Command, CommandError, CommandResult, DeleteCommand};
use crate::config::{GuiSettings, UserPrefs};
use crate::messages;
use crate::model::{FilteredView, ModelManager, ReserveMate};
use crate::parser::{ParseError, ReserveMateParser};
use crate::policy::SchedulePolicy;
use crate::storage::Storage;

pub const MESSAGE_DELETION_CANCELLED: &str = "Deletion cancelled.";
pub const MESSAGE_NOTHING_PENDING: &str = "There is no command awaiting confirmation.";

fn file_ops_error(error: &io::Error) -> String {
    format!("Could not save data due to the following error: {error}")
}

fn file_ops_permission_error(path: &Path) -> String {
    format!(
        "Could not save data to file {} due to insufficient permissions to write to the file or the folder.",
        path.display()
    )
}

/// Why a line of input did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Result type for the logic facade
pub type LogicResult<T> = Result<T, LogicError>;

/// Runs commands against the model and keeps storage in sync
pub struct LogicManager {
    model: ModelManager,
    storage: Box<dyn Storage>,
    parser: ReserveMateParser,
    policy: SchedulePolicy,
    pending: Option<DeleteCommand>,
}

impl LogicManager {
    pub fn new(model: ModelManager, storage: Box<dyn Storage>, policy: SchedulePolicy) -> Self {
        Self {
            model,
            storage,
            parser: ReserveMateParser::new(),
            policy,
            pending: None,
        }
    }

    /// Parse and run one line of input
    ///
    /// Any command awaiting confirmation is dropped first. Mutating commands
    /// are saved afterwards; a failed save is reported as a command failure
    /// but the in-memory change is kept.
    pub fn execute(&mut self, input: &str) -> LogicResult<CommandResult> {
        tracing::info!(input, "user command");

        if self.pending.take().is_some() {
            tracing::debug!("pending delete dropped by new input");
        }

        let command = self.parser.parse_command(input)?;

        if let Command::Delete(delete) = &command {
            if !delete.is_confirmed() {
                return self.ask_to_confirm(delete.clone());
            }
        }

        self.run(command)
    }

    /// Answer the pending confirmation: run it on `true`, drop it on `false`
    pub fn confirm_pending(&mut self, confirmed: bool) -> LogicResult<CommandResult> {
        let Some(pending) = self.pending.take() else {
            return Err(CommandError::new(MESSAGE_NOTHING_PENDING).into());
        };

        if !confirmed {
            tracing::info!(index = %pending.target(), "delete cancelled");
            return Ok(CommandResult::new(MESSAGE_DELETION_CANCELLED));
        }

        self.run(Command::Delete(pending.confirm()))
    }

    pub fn has_pending_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    fn ask_to_confirm(&mut self, delete: DeleteCommand) -> LogicResult<CommandResult> {
        let target = delete.resolve(&self.model)?;
        let prompt = format!(
            "Delete reservation {}: {}? Confirm with y/n.",
            delete.target(),
            messages::format_reservation(&target)
        );
        self.pending = Some(delete);
        Ok(CommandResult::confirmation_needed(prompt))
    }

    fn run(&mut self, command: Command) -> LogicResult<CommandResult> {
        let result = command.execute(&mut self.model, &self.policy);
        match &result {
            Ok(_) => tracing::debug!(command = command.word(), "command succeeded"),
            Err(e) => tracing::debug!(command = command.word(), error = %e, "command failed"),
        }
        let result = result?;

        if command.is_mutating() {
            self.persist()?;
        }

        Ok(result)
    }

    fn persist(&self) -> Result<(), CommandError> {
        self.storage
            .save_reserve_mate(self.model.reserve_mate())
            .map_err(|e| {
                tracing::warn!(error = %e, "saving reservation data failed");
                if e.kind() == io::ErrorKind::PermissionDenied {
                    CommandError::new(file_ops_permission_error(
                        self.storage.reserve_mate_file_path(),
                    ))
                } else {
                    CommandError::new(file_ops_error(&e))
                }
            })
    }

    pub fn reserve_mate(&self) -> &ReserveMate {
        self.model.reserve_mate()
    }

    /// The reservations currently on display, in book order
    pub fn filtered_reservations(&self) -> FilteredView<'_> {
        self.model.filtered_reservations()
    }

    pub fn reserve_mate_file_path(&self) -> &Path {
        self.model.reserve_mate_file_path()
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        self.model.user_prefs()
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.model.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.model.set_gui_settings(gui_settings);
    }

    /// Write the current preferences through storage
    pub fn save_user_prefs(&self) -> io::Result<()> {
        self.storage.save_user_prefs(self.model.user_prefs())
    }
}
