//! User-visible messages and the person/event renderers.
//!
//! Rendering is deterministic: the same entity always produces the same
//! string, with roles and participants in their stored order.

use std::sync::OnceLock;

use crate::models::codes::table_lines;
use crate::models::{Branch, Event, Faculty, Person, Position, Sport, VolunteerRole};
use crate::parser::Prefix;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command: ";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid!";
pub const MESSAGE_INVALID_EVENT_DISPLAYED_INDEX: &str = "The event index provided is invalid!";
pub const MESSAGE_DUPLICATE_FIELDS: &str = "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the list.";
pub const MESSAGE_DUPLICATE_EVENT: &str = "This event already exists in the list.";
pub const MESSAGE_LIST_PERSONS: &str = "Listed all persons";
pub const MESSAGE_LIST_EVENTS: &str = "Listed all events";
pub const MESSAGE_CLEARED: &str = "All persons and events have been cleared!";
pub const MESSAGE_EXIT: &str = "Exiting as requested ...";

pub fn invalid_format(usage: &str) -> String {
    format!("Invalid command format! \n{}", usage)
}

pub fn persons_listed(count: usize) -> String {
    format!("{} persons listed!", count)
}

pub fn events_listed(count: usize) -> String {
    format!("{} events listed!", count)
}

/// Lists each duplicated prefix once, in the order given.
pub fn duplicate_prefixes_message(prefixes: &[Prefix]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for prefix in prefixes {
        if !seen.contains(&prefix.as_str()) {
            seen.push(prefix.as_str());
        }
    }
    format!("{}{}", MESSAGE_DUPLICATE_FIELDS, seen.join(" "))
}

/// `<name>; Phone: <phone>; Email: <email>; Roles: [<role>][<role>]`
pub fn format_person(person: &Person) -> String {
    let roles: String = person.roles.iter().map(|r| format!("[{}]", r)).collect();
    format!(
        "{}; Phone: {}; Email: {}; Roles: {}",
        person.name, person.phone, person.email, roles
    )
}

pub fn format_event(event: &Event) -> String {
    let participants = event
        .participants
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Event Name: {}; Sport: {}; Teams: {}, {}; Venue: {}; Date and Time: {}; Participants: {}",
        event.name,
        event.sport,
        event.teams.team_a(),
        event.teams.team_b(),
        event.venue,
        event.date_time_display(),
        participants
    )
}

const HELP_COMMANDS: &str = "\
Manage the people and matches of the Inter-Faculty Games.

These are the available commands:

help - Display this help page.
Usage: help

add - Add a Person to the list. They must have a name, phone number, email and at least one role.
Usage: add n/<name> p/<phone number> m/<email> {r/<role1>} {r/<role2>} ... {e/<event id>}

You can add multiple roles to a person. The hyphens separate the parts of a role:
1. add ... r/athlete - <faculty> - <sport1>, {sport2}, {sport3}...
2. add ... r/referee - <faculty> - <sport1>, {sport2}, {sport3}...
3. add ... r/committee - <branch> - <position>
4. add ... r/committee - Sports - <position> - <faculty>
5. add ... r/sponsor - <company name>
6. add ... r/volunteer - <volunteerRole>

addevent - Add an Event between two faculties.
Usage: addevent n/<name> s/<sport> t/<faculty> t/<faculty> v/<venue> d/<yyyy-MM-dd HH:mm>

clear - Delete all entries in the list. The deleted entries are gone forever.
Usage: clear

find - Show all Persons containing a case-insensitive keyword in their name, phone, email, or roles.
Usage: find <keyword1> {<keyword2>} {<keyword3>} ...

findevent - Show all Events containing a case-insensitive keyword in their name, sport, venue, or participants.
Usage: findevent <keyword1> {<keyword2>} {<keyword3>} ...

list - List all Persons.
Usage: list

listevents - List all Events.
Usage: listevents

edit - Update a Person's information.
Usage: edit <id> {n/<name>} {p/<phone number>} {m/<email>} {r/<role1>} {r/<role2>} ... {e/<event id>}

WARNING: You must specify at least one field to update. Otherwise, an error will be shown.
WARNING: Editing the event will remove the person from the previous event and add them to the new event.
WARNING: These edits are OVERWRITING changes, not additive. Be careful when editing.

delete - Delete a Person with the given ID.
Usage: delete <id>

deleteevent - Delete an Event with the given ID.
Usage: deleteevent <id>

exit - Exit the program.
Usage: exit

Data is saved after every change and loaded the next time you start.";

static HELP_MESSAGE: OnceLock<String> = OnceLock::new();

/// Full help page, including every code table.
pub fn help_message() -> &'static str {
    HELP_MESSAGE.get_or_init(|| {
        format!(
            "{}\n\n\
             WARNING: For parsing of faculties / teams, only the shortcuts are accepted, not the full faculty names.\n\
             Faculties (Code - Faculty Name):\n{}\n\n\
             INFO: For parsing of sports, both the shortcuts and full sport names are accepted.\n\
             Sports (Code - Sport Name):\n{}\n\n\
             Branches of Committee Members (Code - Branch Name):\n{}\n\n\
             Positions of Committee Members (Code - Position Name):\n{}\n\n\
             Volunteer Roles (Code - Role Name):\n{}",
            HELP_COMMANDS,
            table_lines(Faculty::ALL, Faculty::code, Faculty::name),
            table_lines(Sport::ALL, Sport::code, Sport::name),
            table_lines(Branch::ALL, Branch::code, Branch::name),
            table_lines(Position::ALL, Position::code, Position::name),
            table_lines(VolunteerRole::ALL, VolunteerRole::code, VolunteerRole::name),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Teams, DATE_TIME_FORMAT};
    use chrono::NaiveDateTime;

    fn alex() -> Person {
        Person::new(
            "Alex Yeoh".to_string(),
            "87438807".to_string(),
            "alexyeoh@example.com".to_string(),
            vec![
                Role::Athlete { faculty: Faculty::Computing, sports: vec![Sport::Badminton, Sport::Chess] },
                Role::Volunteer { volunteer_role: VolunteerRole::Emcee },
            ],
        )
    }

    #[test]
    fn test_format_person() {
        assert_eq!(
            format_person(&alex()),
            "Alex Yeoh; Phone: 87438807; Email: alexyeoh@example.com; \
             Roles: [Athlete - Computing - Badminton, Chess][Volunteer - Emcee]"
        );
    }

    #[test]
    fn test_format_event() {
        let event = Event::new(
            "BBM Finals".to_string(),
            Sport::BasketballMen,
            Teams::new(Faculty::Computing, Faculty::Law).unwrap(),
            "MPSH 1".to_string(),
            NaiveDateTime::parse_from_str("2024-10-12 18:30", DATE_TIME_FORMAT).unwrap(),
        )
        .with_participant(alex());
        assert_eq!(
            format_event(&event),
            "Event Name: BBM Finals; Sport: Basketball Men; Teams: Computing, Law; Venue: MPSH 1; \
             Date and Time: 2024-10-12 18:30; Participants: Alex Yeoh"
        );
    }

    #[test]
    fn test_format_is_stable() {
        assert_eq!(format_person(&alex()), format_person(&alex().clone()));
    }

    #[test]
    fn test_duplicate_prefixes_message_lists_once() {
        let msg = duplicate_prefixes_message(&[Prefix::Name, Prefix::Email, Prefix::Name]);
        assert_eq!(msg, "Multiple values specified for the following single-valued field(s): n/ m/");
    }

    #[test]
    fn test_help_lists_every_table() {
        let help = help_message();
        assert!(help.contains("1. BIZ - Business"));
        assert!(help.contains("30. VBW - Volleyball Women"));
        assert!(help.contains("1. SPO - Sports"));
        assert!(help.contains("1. PD - Project Director"));
        assert!(help.contains("6. BMA - Booth Manner"));
    }
}
