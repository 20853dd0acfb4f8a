//! Parsers for individual field values shared by several commands.

use chrono::NaiveDateTime;

use crate::command::Index;
use crate::error::{IndexSpace, ParseError};
use crate::models::{Faculty, Teams, DATE_TIME_FORMAT};
use crate::utils::normalize_whitespace;

use super::role::parse_faculty;

/// Characters allowed in the local part of an email besides alphanumerics.
const EMAIL_SPECIAL_CHARS: &[char] = &['+', '_', '.', '-'];

/// Minimum number of digits in a phone number.
const MIN_PHONE_DIGITS: usize = 3;

/// Parse a 1-based index as typed by the user.
pub fn parse_index(text: &str, space: IndexSpace) -> Result<Index, ParseError> {
    text.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex(space))
}

pub fn parse_name(text: &str) -> Result<String, ParseError> {
    let name = normalize_whitespace(text);
    if name.is_empty() {
        return Err(ParseError::Constraint { field: "name", reason: "name cannot be blank" });
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(ParseError::Constraint {
            field: "name",
            reason: "names should only contain alphanumeric characters and spaces",
        });
    }
    Ok(name)
}

pub fn parse_phone(text: &str) -> Result<String, ParseError> {
    let phone = text.trim();
    if phone.len() < MIN_PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::Constraint {
            field: "phone",
            reason: "phone numbers should only contain digits, and be at least 3 digits long",
        });
    }
    Ok(phone.to_string())
}

pub fn parse_email(text: &str) -> Result<String, ParseError> {
    let email = text.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => is_valid_local_part(local) && is_valid_domain(domain),
        None => false,
    };
    if !valid {
        return Err(ParseError::Constraint {
            field: "email",
            reason: "emails should be of the format local-part@domain, \
                     with an alphanumeric local part and a domain ending in a label of at least 2 characters",
        });
    }
    Ok(email.to_string())
}

fn is_valid_local_part(local: &str) -> bool {
    let starts_and_ends_alnum = local.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && local.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    starts_and_ends_alnum
        && local.chars().all(|c| c.is_ascii_alphanumeric() || EMAIL_SPECIAL_CHARS.contains(&c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    labels_ok && labels.last().is_some_and(|last| last.len() >= 2)
}

/// Free-text field that only has to be non-blank (event name, venue).
pub fn parse_text(text: &str, field: &'static str) -> Result<String, ParseError> {
    let value = normalize_whitespace(text);
    if value.is_empty() {
        return Err(ParseError::Constraint { field, reason: "value cannot be blank" });
    }
    Ok(value)
}

pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(text.trim(), DATE_TIME_FORMAT).map_err(|_| ParseError::Constraint {
        field: "date and time",
        reason: "date and time should be written as yyyy-MM-dd HH:mm",
    })
}

pub fn parse_teams(codes: &[String]) -> Result<Teams, ParseError> {
    let [team_a, team_b] = codes else {
        return Err(ParseError::Constraint { field: "teams", reason: "exactly two teams must be given" });
    };
    let team_a: Faculty = parse_faculty(team_a)?;
    let team_b: Faculty = parse_faculty(team_b)?;
    Teams::new(team_a, team_b)
        .ok_or(ParseError::Constraint { field: "teams", reason: "a team cannot play against itself" })
}

/// Split the preamble of a search command into keywords.
pub fn parse_keywords(text: &str, usage: &'static str) -> Result<Vec<String>, ParseError> {
    let keywords: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::EmptyKeywordList(usage));
    }
    Ok(keywords)
}
