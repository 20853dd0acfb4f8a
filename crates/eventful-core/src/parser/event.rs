//! Parsers for the event commands: addevent, deleteevent, findevent.

use crate::command::Command;
use crate::error::{IndexSpace, ParseError};
use crate::models::Event;

use super::fields::{parse_date_time, parse_index, parse_keywords, parse_teams, parse_text};
use super::role::parse_sport;
use super::tokenizer::{tokenize, Prefix};

pub const ADD_EVENT_USAGE: &str = "addevent: Adds a match between two faculties.\n\
    Usage: addevent n/<name> s/<sport> t/<faculty> t/<faculty> v/<venue> d/<yyyy-MM-dd HH:mm>\n\
    Example: addevent n/BBM Finals s/BBM t/COM t/SCI v/MPSH 1 d/2024-10-12 18:30";

pub const DELETE_EVENT_USAGE: &str = "deleteevent: Deletes the event at the given index.\n\
    Usage: deleteevent <id>\n\
    Example: deleteevent 1";

pub const FIND_EVENT_USAGE: &str = "findevent: Finds all events whose name, sport, venue or participants contain any of the keywords.\n\
    Usage: findevent <keyword1> {<keyword2>} ...\n\
    Example: findevent finals soccer";

const EVENT_PREFIXES: &[Prefix] = &[Prefix::Name, Prefix::Sport, Prefix::Team, Prefix::Venue, Prefix::DateTime];
const SINGLE_VALUED: &[Prefix] = &[Prefix::Name, Prefix::Sport, Prefix::Venue, Prefix::DateTime];

pub fn parse_add_event(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, EVENT_PREFIXES);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(ADD_EVENT_USAGE));
    }
    map.verify_no_duplicates(SINGLE_VALUED)?;

    let require = |prefix: Prefix, field: &'static str| {
        map.value(prefix)
            .ok_or(ParseError::MissingRequiredField { field, usage: ADD_EVENT_USAGE })
    };

    let name = parse_text(require(Prefix::Name, "name")?, "event name")?;
    let sport = parse_sport(require(Prefix::Sport, "sport")?)?;
    require(Prefix::Team, "teams")?;
    let teams = parse_teams(map.all_values(Prefix::Team))?;
    let venue = parse_text(require(Prefix::Venue, "venue")?, "venue")?;
    let date_time = parse_date_time(require(Prefix::DateTime, "date and time")?)?;

    Ok(Command::AddEvent { event: Event::new(name, sport, teams, venue, date_time) })
}

pub fn parse_delete_event(args: &str) -> Result<Command, ParseError> {
    if args.trim().is_empty() {
        return Err(ParseError::InvalidFormat(DELETE_EVENT_USAGE));
    }
    let index = parse_index(args, IndexSpace::Event)?;
    Ok(Command::DeleteEvent { index })
}

pub fn parse_find_event(args: &str) -> Result<Command, ParseError> {
    let keywords = parse_keywords(args, FIND_EVENT_USAGE)?;
    Ok(Command::FindEvent { keywords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Faculty, Sport};

    #[test]
    fn test_add_event() {
        let Command::AddEvent { event } =
            parse_add_event(" n/BBM Finals s/Basketball Men t/COM t/sci v/MPSH 1 d/2024-10-12 18:30").unwrap()
        else {
            panic!("expected addevent");
        };
        assert_eq!(event.name, "BBM Finals");
        assert_eq!(event.sport, Sport::BasketballMen);
        assert_eq!(event.teams.team_b(), Faculty::Science);
        assert_eq!(event.date_time_display(), "2024-10-12 18:30");
        assert!(event.participants.is_empty());
    }

    #[test]
    fn test_add_event_duplicates_and_missing() {
        assert_eq!(
            parse_add_event(" n/A n/B s/CHE s/BMT t/COM t/SCI v/X d/2024-01-01 10:00").unwrap_err(),
            ParseError::DuplicatePrefix(vec![Prefix::Name, Prefix::Sport])
        );
        assert_eq!(
            parse_add_event(" n/A s/CHE v/X d/2024-01-01 10:00").unwrap_err(),
            ParseError::MissingRequiredField { field: "teams", usage: ADD_EVENT_USAGE }
        );
    }

    #[test]
    fn test_add_event_same_team_twice() {
        assert!(matches!(
            parse_add_event(" n/A s/CHE t/COM t/com v/X d/2024-01-01 10:00").unwrap_err(),
            ParseError::Constraint { field: "teams", .. }
        ));
    }

    #[test]
    fn test_delete_event_uses_event_index_space() {
        assert_eq!(parse_delete_event(" nope").unwrap_err(), ParseError::InvalidIndex(IndexSpace::Event));
        assert!(matches!(parse_delete_event(" 1").unwrap(), Command::DeleteEvent { .. }));
    }

    #[test]
    fn test_find_event_requires_keyword() {
        assert_eq!(parse_find_event("  ").unwrap_err(), ParseError::EmptyKeywordList(FIND_EVENT_USAGE));
    }
}
