//! Eventful core - contact and match management for an inter-faculty sports festival.
//!
//! A line of user input flows through:
//!
//! - `parser`: tokenizes prefixed fields and validates them into a `Command`
//! - `command`: executes the command against the in-memory `Roster`
//! - `messages`: renders persons, events and feedback for display
//! - `storage`: loads and saves the roster as JSON
//!
//! The binary crate owns the read-eval loop and the display sink.

pub mod command;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod parser;
pub mod roster;
pub mod storage;
pub mod utils;

pub use command::{execute, Command, CommandResult, EditPersonDescriptor, Index};
pub use config::Config;
pub use error::{CommandError, IndexSpace, ParseError};
pub use models::{Branch, Event, Faculty, Person, Position, Role, Sport, Teams, VolunteerRole};
pub use parser::parse_command;
pub use roster::Roster;
pub use storage::{JsonStorage, Storage};

/// Receives formatted output for the user.
pub trait DisplaySink {
    fn display(&mut self, message: &str);

    /// Shown before each line of input is read. Sinks that are not a terminal
    /// can ignore it.
    fn prompt(&mut self, _prompt: &str) {}
}
