// crates/reservemate-core/src/parser/mod.rs - Turn a line of user input into a Command
//
// The first whitespace-separated word selects the verb (case-insensitive);
// the rest of the line is handed to that verb's argument parser. Parsing
// never looks at the reservation book.

mod add;
mod delete;
mod edit;
mod find;
pub mod tokenizer;
mod util;

use thiserror::Error;

use crate::commands::{
    ClearCommand, Command, ExitCommand, HelpCommand, ListCommand, add as add_cmd,
    clear as clear_cmd, delete as delete_cmd, edit as edit_cmd, exit as exit_cmd,
    find as find_cmd, help as help_cmd, list as list_cmd,
};
use crate::commands::edit::MESSAGE_NOT_EDITED;
use crate::messages::{
    MESSAGE_DUPLICATE_FIELDS, MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_UNKNOWN_COMMAND,
};

pub use tokenizer::{ArgumentMultimap, Prefix, tokenize};

/// Reasons a line of input could not become a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, .usage)]
    InvalidFormat { usage: &'static str },

    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    #[error("{message}\n{usage}")]
    InvalidField { message: String, usage: &'static str },

    #[error("{}{}", MESSAGE_DUPLICATE_FIELDS, join_prefixes(.0))]
    DuplicatePrefixes(Vec<Prefix>),

    #[error("{}", MESSAGE_NOT_EDITED)]
    NoFieldsToEdit,
}

/// Result type for parsing
pub type ParseResult<T> = Result<T, ParseError>;

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parser for the ReserveMate command grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct ReserveMateParser;

impl ReserveMateParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one line of input into a command
    pub fn parse_command(&self, input: &str) -> ParseResult<Command> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: help_cmd::MESSAGE_USAGE,
            });
        }

        let (word, args) = match trimmed.find(char::is_whitespace) {
            Some(split) => trimmed.split_at(split),
            None => (trimmed, ""),
        };

        match word.to_lowercase().as_str() {
            add_cmd::COMMAND_WORD => add::parse(args).map(Command::Add),
            delete_cmd::COMMAND_WORD => delete::parse(args).map(Command::Delete),
            edit_cmd::COMMAND_WORD => edit::parse(args).map(Command::Edit),
            find_cmd::COMMAND_WORD => find::parse(args).map(Command::Find),
            list_cmd::COMMAND_WORD => Ok(Command::List(ListCommand)),
            clear_cmd::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
            help_cmd::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
            exit_cmd::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}
