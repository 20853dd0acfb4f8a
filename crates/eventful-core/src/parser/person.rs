//! Parsers for the person commands: add, edit, delete, find.

use crate::command::{Command, EditPersonDescriptor};
use crate::error::{IndexSpace, ParseError};
use crate::models::{Person, Role};

use super::fields::{parse_email, parse_index, parse_keywords, parse_name, parse_phone};
use super::role::parse_role;
use super::tokenizer::{tokenize, ArgumentMultimap, Prefix};

pub const ADD_USAGE: &str = "add: Adds a person to the list.\n\
    Usage: add n/<name> p/<phone number> m/<email> r/<role1> {r/<role2>} ... {e/<event id>}\n\
    Example: add n/Alex Yeoh p/87438807 m/alexyeoh@example.com r/athlete - COM - BMT, CHE";

pub const EDIT_USAGE: &str = "edit: Edits the person at the given index. Existing values are overwritten.\n\
    Usage: edit <id> {n/<name>} {p/<phone number>} {m/<email>} {r/<role1>} ... {e/<event id>}\n\
    Example: edit 1 p/91234567 m/johndoe@example.com";

pub const DELETE_USAGE: &str = "delete: Deletes the person at the given index.\n\
    Usage: delete <id>\n\
    Example: delete 1";

pub const FIND_USAGE: &str = "find: Finds all persons whose name, phone, email or roles contain any of the keywords.\n\
    Usage: find <keyword1> {<keyword2>} ...\n\
    Example: find alex COM";

const PERSON_PREFIXES: &[Prefix] = &[Prefix::Name, Prefix::Phone, Prefix::Email, Prefix::Role, Prefix::Event];
const SINGLE_VALUED: &[Prefix] = &[Prefix::Name, Prefix::Phone, Prefix::Email, Prefix::Event];

/// Every `r/` value must parse; the first failure aborts the command.
fn parse_roles(values: &[String]) -> Result<Vec<Role>, ParseError> {
    values.iter().map(|v| parse_role(v)).collect()
}

fn required<'a>(map: &'a ArgumentMultimap, prefix: Prefix, field: &'static str) -> Result<&'a str, ParseError> {
    map.value(prefix).ok_or(ParseError::MissingRequiredField { field, usage: ADD_USAGE })
}

pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, PERSON_PREFIXES);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(ADD_USAGE));
    }
    map.verify_no_duplicates(SINGLE_VALUED)?;

    let name = parse_name(required(&map, Prefix::Name, "name")?)?;
    let phone = parse_phone(required(&map, Prefix::Phone, "phone")?)?;
    let email = parse_email(required(&map, Prefix::Email, "email")?)?;
    if !map.contains(Prefix::Role) {
        return Err(ParseError::MissingRequiredField { field: "role", usage: ADD_USAGE });
    }
    let roles = parse_roles(map.all_values(Prefix::Role))?;
    let event = map
        .value(Prefix::Event)
        .map(|v| parse_index(v, IndexSpace::Event))
        .transpose()?;

    Ok(Command::Add { person: Person::new(name, phone, email, roles), event })
}

pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, PERSON_PREFIXES);
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(EDIT_USAGE));
    }
    let index = parse_index(map.preamble(), IndexSpace::Person)?;
    map.verify_no_duplicates(SINGLE_VALUED)?;

    let descriptor = EditPersonDescriptor {
        name: map.value(Prefix::Name).map(parse_name).transpose()?,
        phone: map.value(Prefix::Phone).map(parse_phone).transpose()?,
        email: map.value(Prefix::Email).map(parse_email).transpose()?,
        roles: if map.contains(Prefix::Role) {
            Some(parse_roles(map.all_values(Prefix::Role))?)
        } else {
            None
        },
        event: map
            .value(Prefix::Event)
            .map(|v| parse_index(v, IndexSpace::Event))
            .transpose()?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(Command::Edit { index, descriptor })
}

pub fn parse_delete(args: &str) -> Result<Command, ParseError> {
    if args.trim().is_empty() {
        return Err(ParseError::InvalidFormat(DELETE_USAGE));
    }
    let index = parse_index(args, IndexSpace::Person)?;
    Ok(Command::Delete { index })
}

pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let keywords = parse_keywords(args, FIND_USAGE)?;
    Ok(Command::Find { keywords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Faculty, Sport};

    const ALEX: &str = " n/Alex Yeoh p/87438807 m/alexyeoh@example.com r/athlete - COM - BMT, CHE";

    #[test]
    fn test_add_alex() {
        let Command::Add { person, event } = parse_add(ALEX).unwrap() else {
            panic!("expected add");
        };
        assert_eq!(person.name, "Alex Yeoh");
        assert_eq!(person.phone, "87438807");
        assert_eq!(event, None);
        assert_eq!(
            person.roles,
            vec![Role::Athlete { faculty: Faculty::Computing, sports: vec![Sport::Badminton, Sport::Chess] }]
        );
        assert_eq!(person.roles[0].to_string(), "Athlete - Computing - Badminton, Chess");
    }

    #[test]
    fn test_add_code_case_does_not_matter() {
        let lower = parse_add(" n/A p/123 m/a@b.co r/athlete - com - bmt").unwrap();
        let upper = parse_add(" n/A p/123 m/a@b.co r/athlete - COM - BMT").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_add_reports_every_duplicate_prefix() {
        let err = parse_add(" n/A n/B p/1 m/a@b.co m/c@d.co r/volunteer - MC").unwrap_err();
        assert_eq!(err, ParseError::DuplicatePrefix(vec![Prefix::Name, Prefix::Email]));
    }

    #[test]
    fn test_add_missing_fields() {
        assert_eq!(
            parse_add(" p/123 m/a@b.co r/volunteer - MC").unwrap_err(),
            ParseError::MissingRequiredField { field: "name", usage: ADD_USAGE }
        );
        assert_eq!(
            parse_add(" n/A p/123 m/a@b.co").unwrap_err(),
            ParseError::MissingRequiredField { field: "role", usage: ADD_USAGE }
        );
    }

    #[test]
    fn test_add_one_bad_role_aborts() {
        let err = parse_add(" n/A p/123 m/a@b.co r/volunteer - MC r/committee - Sports - PD").unwrap_err();
        assert!(matches!(err, ParseError::StructuralRole(_)));
    }

    #[test]
    fn test_add_rejects_preamble() {
        assert_eq!(parse_add(" hello n/A").unwrap_err(), ParseError::InvalidFormat(ADD_USAGE));
    }

    #[test]
    fn test_add_with_event() {
        let Command::Add { event, .. } = parse_add(&format!("{} e/2", ALEX)).unwrap() else {
            panic!("expected add");
        };
        assert_eq!(event.map(|i| i.one_based()), Some(2));
    }

    #[test]
    fn test_edit_needs_a_field() {
        assert_eq!(parse_edit(" 1").unwrap_err(), ParseError::NothingToEdit);
        assert_eq!(parse_edit(" 400").unwrap_err(), ParseError::NothingToEdit);
    }

    #[test]
    fn test_edit_index_errors() {
        assert_eq!(parse_edit("").unwrap_err(), ParseError::InvalidFormat(EDIT_USAGE));
        assert_eq!(
            parse_edit(" 0 n/A").unwrap_err(),
            ParseError::InvalidIndex(IndexSpace::Person)
        );
        assert_eq!(
            parse_edit(" x n/A").unwrap_err(),
            ParseError::InvalidIndex(IndexSpace::Person)
        );
    }

    #[test]
    fn test_edit_replaces_roles() {
        let Command::Edit { index, descriptor } =
            parse_edit(" 2 r/sponsor - Acme r/volunteer - LOG").unwrap()
        else {
            panic!("expected edit");
        };
        assert_eq!(index.one_based(), 2);
        assert_eq!(descriptor.roles.map(|r| r.len()), Some(2));
        assert_eq!(descriptor.name, None);
    }

    #[test]
    fn test_edit_empty_role_is_rejected() {
        assert!(matches!(
            parse_edit(" 1 r/").unwrap_err(),
            ParseError::MissingRequiredField { field: "role", .. }
        ));
    }

    #[test]
    fn test_delete() {
        assert!(matches!(parse_delete(" 3").unwrap(), Command::Delete { .. }));
        assert_eq!(parse_delete(" ").unwrap_err(), ParseError::InvalidFormat(DELETE_USAGE));
        assert_eq!(parse_delete(" abc").unwrap_err(), ParseError::InvalidIndex(IndexSpace::Person));
    }

    #[test]
    fn test_find() {
        assert_eq!(
            parse_find(" alex COM").unwrap(),
            Command::Find { keywords: vec!["alex".to_string(), "COM".to_string()] }
        );
        assert_eq!(parse_find("").unwrap_err(), ParseError::EmptyKeywordList(FIND_USAGE));
    }
}
