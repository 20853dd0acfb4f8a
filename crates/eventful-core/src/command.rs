//! Parsed commands and their execution against a `Roster`.
//!
//! Commands are plain data; `execute` is the only place the roster changes.
//! Persisting the result is left to the caller (see `CommandResult::mutated`).

use tracing::{debug, info};

use crate::error::{CommandError, IndexSpace};
use crate::messages;
use crate::models::{Event, Person, Role};
use crate::roster::Roster;

/// A 1-based position in a displayed list, stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    /// Returns `None` for 0.
    pub fn from_one_based(n: usize) -> Option<Self> {
        n.checked_sub(1).map(Index)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

/// Fields supplied to `edit`. Anything left `None` keeps the old value;
/// `roles` replaces the whole role list when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub roles: Option<Vec<Role>>,
    pub event: Option<Index>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.roles.is_some()
            || self.event.is_some()
    }

    /// Build the replacement person from `old` and the edited fields.
    pub fn apply(&self, old: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| old.name.clone()),
            self.phone.clone().unwrap_or_else(|| old.phone.clone()),
            self.email.clone().unwrap_or_else(|| old.email.clone()),
            self.roles.clone().unwrap_or_else(|| old.roles.clone()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { person: Person, event: Option<Index> },
    Edit { index: Index, descriptor: EditPersonDescriptor },
    Delete { index: Index },
    Find { keywords: Vec<String> },
    List,
    AddEvent { event: Event },
    DeleteEvent { index: Index },
    FindEvent { keywords: Vec<String> },
    ListEvents,
    Clear,
    Help,
    Exit,
}

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The roster changed and should be saved.
    pub mutated: bool,
    pub exit: bool,
}

impl CommandResult {
    fn view(feedback: String) -> Self {
        Self { feedback, mutated: false, exit: false }
    }

    fn changed(feedback: String) -> Self {
        Self { feedback, mutated: true, exit: false }
    }
}

pub fn execute(command: Command, roster: &mut Roster) -> Result<CommandResult, CommandError> {
    debug!(?command, "Executing command");
    match command {
        Command::Add { person, event } => add_person(person, event, roster),
        Command::Edit { index, descriptor } => edit_person(index, &descriptor, roster),
        Command::Delete { index } => delete_person(index, roster),
        Command::Find { keywords } => {
            roster.set_person_filter(Some(keywords));
            let count = roster.displayed_persons().len();
            Ok(CommandResult::view(messages::persons_listed(count)))
        }
        Command::List => {
            roster.set_person_filter(None);
            Ok(CommandResult::view(messages::MESSAGE_LIST_PERSONS.to_string()))
        }
        Command::AddEvent { event } => add_event(event, roster),
        Command::DeleteEvent { index } => delete_event(index, roster),
        Command::FindEvent { keywords } => {
            roster.set_event_filter(Some(keywords));
            let count = roster.displayed_events().len();
            Ok(CommandResult::view(messages::events_listed(count)))
        }
        Command::ListEvents => {
            roster.set_event_filter(None);
            Ok(CommandResult::view(messages::MESSAGE_LIST_EVENTS.to_string()))
        }
        Command::Clear => {
            roster.clear();
            info!("Cleared all persons and events");
            Ok(CommandResult::changed(messages::MESSAGE_CLEARED.to_string()))
        }
        Command::Help => Ok(CommandResult::view(messages::help_message().to_string())),
        Command::Exit => Ok(CommandResult {
            feedback: messages::MESSAGE_EXIT.to_string(),
            mutated: false,
            exit: true,
        }),
    }
}

fn add_person(person: Person, event: Option<Index>, roster: &mut Roster) -> Result<CommandResult, CommandError> {
    if roster.has_person(&person) {
        return Err(CommandError::DuplicatePerson);
    }
    let event_position = event
        .map(|i| roster.resolve_event(i).ok_or(CommandError::InvalidIndex(IndexSpace::Event)))
        .transpose()?;

    roster.add_person(person.clone());
    if let Some(position) = event_position {
        let joined = roster.event_at(position).with_participant(person.clone());
        roster.replace_event_at(position, joined);
    }
    roster.set_person_filter(None);

    info!(name = %person.name, roles = person.roles.len(), "Added person");
    Ok(CommandResult::changed(format!("New person added: {}", messages::format_person(&person))))
}

fn edit_person(
    index: Index,
    descriptor: &EditPersonDescriptor,
    roster: &mut Roster,
) -> Result<CommandResult, CommandError> {
    let position = roster
        .resolve_person(index)
        .ok_or(CommandError::InvalidIndex(IndexSpace::Person))?;
    let old = roster.person_at(position).clone();
    let edited = descriptor.apply(&old);

    if !old.is_same_person(&edited) && roster.has_person(&edited) {
        return Err(CommandError::DuplicatePerson);
    }
    let target = descriptor
        .event
        .map(|i| roster.resolve_event(i).ok_or(CommandError::InvalidIndex(IndexSpace::Event)))
        .transpose()?;
    let current = roster.event_of(&old);

    roster.replace_person_at(position, edited.clone());
    match (current, target) {
        (Some(from), Some(to)) if from != to => {
            let left = roster.event_at(from).without_participant(&old);
            roster.replace_event_at(from, left);
            let joined = roster.event_at(to).with_participant(edited.clone());
            roster.replace_event_at(to, joined);
        }
        (Some(at), _) => {
            let updated = roster.event_at(at).with_participant_replaced(&old, edited.clone());
            roster.replace_event_at(at, updated);
        }
        (None, Some(to)) => {
            let joined = roster.event_at(to).with_participant(edited.clone());
            roster.replace_event_at(to, joined);
        }
        (None, None) => {}
    }
    roster.set_person_filter(None);

    info!(index = index.one_based(), name = %edited.name, "Edited person");
    Ok(CommandResult::changed(format!("Edited Person: {}", messages::format_person(&edited))))
}

fn delete_person(index: Index, roster: &mut Roster) -> Result<CommandResult, CommandError> {
    let position = roster
        .resolve_person(index)
        .ok_or(CommandError::InvalidIndex(IndexSpace::Person))?;
    let removed = roster.remove_person_at(position);

    while let Some(at) = roster.event_of(&removed) {
        let left = roster.event_at(at).without_participant(&removed);
        roster.replace_event_at(at, left);
    }

    info!(index = index.one_based(), name = %removed.name, "Deleted person");
    Ok(CommandResult::changed(format!("Deleted Person: {}", messages::format_person(&removed))))
}

fn add_event(event: Event, roster: &mut Roster) -> Result<CommandResult, CommandError> {
    if roster.has_event(&event) {
        return Err(CommandError::DuplicateEvent);
    }
    let feedback = format!("New event added: {}", messages::format_event(&event));
    info!(name = %event.name, sport = event.sport.code(), "Added event");
    roster.add_event(event);
    roster.set_event_filter(None);
    Ok(CommandResult::changed(feedback))
}

fn delete_event(index: Index, roster: &mut Roster) -> Result<CommandResult, CommandError> {
    let position = roster
        .resolve_event(index)
        .ok_or(CommandError::InvalidIndex(IndexSpace::Event))?;
    let removed = roster.remove_event_at(position);
    info!(index = index.one_based(), name = %removed.name, "Deleted event");
    Ok(CommandResult::changed(format!("Deleted Event: {}", messages::format_event(&removed))))
}
