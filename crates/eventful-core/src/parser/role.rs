//! Builds a `Role` from the text of one `r/` field.
//!
//! Shape: `<kind> - <segment> - <segment> ...`, where the kind is one of
//! athlete, referee, committee, sponsor or volunteer and the segments are
//! interpreted per kind. A sponsor's company name is taken whole, hyphens
//! included.

use tracing::debug;

use crate::error::ParseError;
use crate::models::{Branch, Faculty, Position, Role, Sport, VolunteerRole};

pub const ROLE_USAGE: &str = "Role formats:\n\
    athlete - <faculty> - <sport1>, {sport2}, ...\n\
    referee - <faculty> - <sport1>, {sport2}, ...\n\
    committee - <branch> - <position>\n\
    committee - Sports - <position> - <faculty>\n\
    sponsor - <company name>\n\
    volunteer - <volunteer role>";

const SEGMENT_SEPARATOR: char = '-';
const SPORT_SEPARATOR: char = ',';

pub fn parse_role(spec: &str) -> Result<Role, ParseError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(ParseError::MissingRequiredField { field: "role", usage: ROLE_USAGE });
    }

    let (kind, rest) = match spec.split_once(SEGMENT_SEPARATOR) {
        Some((kind, rest)) => (kind, rest.trim()),
        None => (spec, ""),
    };

    let role = match kind.trim().to_lowercase().as_str() {
        "athlete" => {
            let (faculty, sports) = parse_faculty_and_sports("athlete", rest)?;
            Role::athlete(faculty, sports)?
        }
        "referee" => {
            let (faculty, sports) = parse_faculty_and_sports("referee", rest)?;
            Role::referee(faculty, sports)?
        }
        "committee" => parse_committee(rest)?,
        "sponsor" => Role::sponsor(rest)?,
        "volunteer" => parse_volunteer(rest)?,
        _ => return Err(ParseError::UnknownRoleKind(kind.trim().to_string())),
    };

    debug!(role = %role, "Parsed role");
    Ok(role)
}

fn segments(rest: &str) -> Vec<&str> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split(SEGMENT_SEPARATOR).map(str::trim).collect()
}

pub fn parse_faculty(code: &str) -> Result<Faculty, ParseError> {
    Faculty::from_code(code).ok_or_else(|| ParseError::UnknownFaculty(code.trim().to_string()))
}

pub fn parse_sport(token: &str) -> Result<Sport, ParseError> {
    Sport::parse(token).ok_or_else(|| ParseError::UnknownSport(token.trim().to_string()))
}

fn parse_faculty_and_sports(kind: &str, rest: &str) -> Result<(Faculty, Vec<Sport>), ParseError> {
    let parts = segments(rest);
    let [faculty, sports] = parts.as_slice() else {
        return Err(ParseError::StructuralRole(format!(
            "{} needs exactly a faculty and a sport list: {} - <faculty> - <sport1>, {{sport2}}, ...",
            kind, kind
        )));
    };

    let faculty = parse_faculty(faculty)?;
    let sports = sports
        .split(SPORT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_sport)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((faculty, sports))
}

fn parse_committee(rest: &str) -> Result<Role, ParseError> {
    let parts = segments(rest);
    if parts.len() < 2 || parts.len() > 3 {
        return Err(ParseError::StructuralRole(
            "committee needs a branch and a position, plus a faculty for the Sports branch".to_string(),
        ));
    }

    let branch = Branch::parse(parts[0]).ok_or_else(|| ParseError::UnknownBranch(parts[0].to_string()))?;
    let position =
        Position::from_code(parts[1]).ok_or_else(|| ParseError::UnknownPosition(parts[1].to_string()))?;

    let faculty = parts.get(2).map(|code| parse_faculty(code)).transpose()?;
    Role::committee(branch, position, faculty)
}

fn parse_volunteer(rest: &str) -> Result<Role, ParseError> {
    match segments(rest).as_slice() {
        [code] if !code.is_empty() => VolunteerRole::from_code(code)
            .map(|volunteer_role| Role::Volunteer { volunteer_role })
            .ok_or_else(|| ParseError::UnknownVolunteerRole(code.to_string())),
        [] | [_] => Err(ParseError::MissingRequiredField { field: "volunteer role", usage: ROLE_USAGE }),
        _ => Err(ParseError::StructuralRole(
            "volunteer takes a single role code: volunteer - <volunteer role>".to_string(),
        )),
    }
}
