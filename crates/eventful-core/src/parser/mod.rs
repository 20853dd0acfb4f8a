//! Turns one line of user input into a validated `Command`.
//!
//! Parsing never touches the roster; every failure comes back as a
//! `ParseError` carrying the message to show.

pub mod event;
pub mod fields;
pub mod person;
pub mod role;
pub mod tokenizer;

use tracing::debug;

use crate::command::Command;
use crate::error::ParseError;

pub use role::parse_role;
pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};

pub const COMMAND_USAGE: &str = "Type help to see the list of commands.";

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::InvalidFormat(COMMAND_USAGE));
    }

    let (word, args) = match line.find(char::is_whitespace) {
        Some(at) => line.split_at(at),
        None => (line, ""),
    };

    let command = match word {
        "add" => person::parse_add(args)?,
        "edit" => person::parse_edit(args)?,
        "delete" => person::parse_delete(args)?,
        "find" => person::parse_find(args)?,
        "list" => Command::List,
        "addevent" => event::parse_add_event(args)?,
        "deleteevent" => event::parse_delete_event(args)?,
        "findevent" => event::parse_find_event(args)?,
        "listevents" => Command::ListEvents,
        "clear" => Command::Clear,
        "help" => Command::Help,
        "exit" => Command::Exit,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    debug!(command = word, "Parsed command");
    Ok(command)
}
