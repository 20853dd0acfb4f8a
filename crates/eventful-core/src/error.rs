use thiserror::Error;

use crate::messages;
use crate::parser::Prefix;

/// Which displayed list an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSpace {
    Person,
    Event,
}

impl IndexSpace {
    pub fn invalid_message(&self) -> &'static str {
        match self {
            IndexSpace::Person => messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
            IndexSpace::Event => messages::MESSAGE_INVALID_EVENT_DISPLAYED_INDEX,
        }
    }
}

/// Everything that can go wrong while turning a command line into a `Command`.
///
/// Each variant renders to the single message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}", messages::duplicate_prefixes_message(.0))]
    DuplicatePrefix(Vec<Prefix>),

    #[error("Missing required field: {field}\n{usage}")]
    MissingRequiredField { field: &'static str, usage: &'static str },

    #[error("{}", messages::invalid_format(.0))]
    InvalidFormat(&'static str),

    #[error("Unknown role type: {0}. Use athlete, referee, committee, sponsor or volunteer.")]
    UnknownRoleKind(String),

    #[error("Unknown faculty code: {0}. Type help to see the list of faculties.")]
    UnknownFaculty(String),

    #[error("Unknown sport: {0}. Type help to see the list of sports.")]
    UnknownSport(String),

    #[error("Unknown committee branch: {0}. Type help to see the list of branches.")]
    UnknownBranch(String),

    #[error("Unknown committee position: {0}. Type help to see the list of positions.")]
    UnknownPosition(String),

    #[error("Unknown volunteer role: {0}. Type help to see the list of volunteer roles.")]
    UnknownVolunteerRole(String),

    #[error("Invalid role: {0}")]
    StructuralRole(String),

    #[error("{}", .0.invalid_message())]
    InvalidIndex(IndexSpace),

    #[error("{}{}", messages::MESSAGE_UNKNOWN_COMMAND, .0)]
    UnknownCommand(String),

    #[error("Please provide at least one keyword.\n{0}")]
    EmptyKeywordList(&'static str),

    #[error("{}", messages::MESSAGE_NOT_EDITED)]
    NothingToEdit,

    #[error("Invalid {field}: {reason}")]
    Constraint { field: &'static str, reason: &'static str },
}

/// Failures while executing an already-parsed command against the roster.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{}", .0.invalid_message())]
    InvalidIndex(IndexSpace),

    #[error("{}", messages::MESSAGE_DUPLICATE_PERSON)]
    DuplicatePerson,

    #[error("{}", messages::MESSAGE_DUPLICATE_EVENT)]
    DuplicateEvent,

    #[error("Could not save data: {0}")]
    Storage(#[from] anyhow::Error),
}
