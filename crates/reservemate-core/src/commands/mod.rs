// crates/reservemate-core/src/commands/mod.rs - Executable commands
//
// Every verb the parser understands becomes one `Command` variant. Executing a
// command is a single transition on the model: it validates first and only
// then mutates, so a failed command leaves the model exactly as it found it.
//
// MODULE ORGANIZATION:
// - add, delete, edit: book mutations
// - find, list: filter changes
// - clear: wipe the book
// - help, exit: no state change, only signals for the host

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;

use thiserror::Error;

use crate::model::ModelManager;
use crate::policy::SchedulePolicy;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditReservationDescriptor};
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;

/// Execution-time failure, carrying the message shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CommandError(pub String);

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Result type for command execution
pub type CommandOutcome = Result<CommandResult, CommandError>;

/// What a command reports back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    /// Host should display usage help
    pub show_help: bool,
    /// Host should shut down
    pub exit: bool,
    /// Host should ask the user to confirm a pending command
    pub awaiting_confirmation: bool,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
            awaiting_confirmation: false,
        }
    }

    pub fn help(feedback_to_user: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn exiting(feedback_to_user: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn confirmation_needed(feedback_to_user: impl Into<String>) -> Self {
        Self {
            awaiting_confirmation: true,
            ..Self::new(feedback_to_user)
        }
    }
}

/// A parsed, validated intent to query or change the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut ModelManager, policy: &SchedulePolicy) -> CommandOutcome {
        match self {
            Self::Add(cmd) => cmd.execute(model, policy),
            Self::Delete(cmd) => cmd.execute(model),
            Self::Edit(cmd) => cmd.execute(model, policy),
            Self::Find(cmd) => cmd.execute(model),
            Self::List(cmd) => cmd.execute(model),
            Self::Clear(cmd) => cmd.execute(model),
            Self::Help(cmd) => cmd.execute(),
            Self::Exit(cmd) => cmd.execute(),
        }
    }

    /// Whether a successful run changes the book and must be persisted
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Delete(_) | Self::Edit(_) | Self::Clear(_)
        )
    }

    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => add::COMMAND_WORD,
            Self::Delete(_) => delete::COMMAND_WORD,
            Self::Edit(_) => edit::COMMAND_WORD,
            Self::Find(_) => find::COMMAND_WORD,
            Self::List(_) => list::COMMAND_WORD,
            Self::Clear(_) => clear::COMMAND_WORD,
            Self::Help(_) => help::COMMAND_WORD,
            Self::Exit(_) => exit::COMMAND_WORD,
        }
    }
}
