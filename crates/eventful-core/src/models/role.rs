use serde::{Deserialize, Serialize};

use super::codes::{Branch, Faculty, Position, Sport, VolunteerRole};
use crate::error::ParseError;
use crate::parser::role::ROLE_USAGE;

/// What a person does at the festival.
///
/// Every variant renders to one canonical display string (see the `Display`
/// impl), which is used both on screen and for keyword search. Saved roles
/// pass the same checks as typed ones before they are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", try_from = "RawRole")]
pub enum Role {
    Athlete { faculty: Faculty, sports: Vec<Sport> },
    Referee { faculty: Faculty, sports: Vec<Sport> },
    Committee {
        branch: Branch,
        position: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        faculty: Option<Faculty>,
    },
    Sponsor { company_name: String },
    Volunteer { volunteer_role: VolunteerRole },
}

/// A role as read from disk, before validation.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RawRole {
    Athlete { faculty: Faculty, sports: Vec<Sport> },
    Referee { faculty: Faculty, sports: Vec<Sport> },
    Committee {
        branch: Branch,
        position: Position,
        #[serde(default)]
        faculty: Option<Faculty>,
    },
    Sponsor { company_name: String },
    Volunteer { volunteer_role: VolunteerRole },
}

impl TryFrom<RawRole> for Role {
    type Error = ParseError;

    fn try_from(raw: RawRole) -> Result<Self, Self::Error> {
        match raw {
            RawRole::Athlete { faculty, sports } => Role::athlete(faculty, sports),
            RawRole::Referee { faculty, sports } => Role::referee(faculty, sports),
            RawRole::Committee { branch, position, faculty } => Role::committee(branch, position, faculty),
            RawRole::Sponsor { company_name } => Role::sponsor(&company_name),
            RawRole::Volunteer { volunteer_role } => Ok(Role::Volunteer { volunteer_role }),
        }
    }
}

impl Role {
    pub fn athlete(faculty: Faculty, sports: Vec<Sport>) -> Result<Self, ParseError> {
        Ok(Role::Athlete { faculty, sports: distinct_sports(sports)? })
    }

    pub fn referee(faculty: Faculty, sports: Vec<Sport>) -> Result<Self, ParseError> {
        Ok(Role::Referee { faculty, sports: distinct_sports(sports)? })
    }

    /// Only the Sports branch carries a faculty, and there it is required.
    pub fn committee(branch: Branch, position: Position, faculty: Option<Faculty>) -> Result<Self, ParseError> {
        match (branch, faculty) {
            (Branch::Sports, None) => Err(ParseError::StructuralRole(
                "committee members in the Sports branch must name a faculty: committee - Sports - <position> - <faculty>"
                    .to_string(),
            )),
            (Branch::Sports, Some(_)) | (_, None) => Ok(Role::Committee { branch, position, faculty }),
            (_, Some(_)) => Err(ParseError::StructuralRole(format!(
                "only the Sports branch takes a faculty, but {} was given one",
                branch.name()
            ))),
        }
    }

    pub fn sponsor(company_name: &str) -> Result<Self, ParseError> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(ParseError::MissingRequiredField { field: "company name", usage: ROLE_USAGE });
        }
        Ok(Role::Sponsor { company_name: company_name.to_string() })
    }
}

/// Drops repeated sports, keeping first-seen order. At least one must remain.
fn distinct_sports(sports: Vec<Sport>) -> Result<Vec<Sport>, ParseError> {
    let mut unique: Vec<Sport> = Vec::with_capacity(sports.len());
    for sport in sports {
        if !unique.contains(&sport) {
            unique.push(sport);
        }
    }
    if unique.is_empty() {
        return Err(ParseError::MissingRequiredField { field: "sport", usage: ROLE_USAGE });
    }
    Ok(unique)
}

fn sport_list(sports: &[Sport]) -> String {
    sports.iter().map(Sport::name).collect::<Vec<_>>().join(", ")
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Athlete { faculty, sports } => {
                write!(f, "Athlete - {} - {}", faculty, sport_list(sports))
            }
            Role::Referee { faculty, sports } => {
                write!(f, "Referee - {} - {}", faculty, sport_list(sports))
            }
            Role::Committee { branch, position, faculty: Some(faculty) } => {
                write!(f, "Committee - {} - {} - {}", branch, position, faculty)
            }
            Role::Committee { branch, position, faculty: None } => {
                write!(f, "Committee - {} - {}", branch, position)
            }
            Role::Sponsor { company_name } => write!(f, "Sponsor - {}", company_name),
            Role::Volunteer { volunteer_role } => write!(f, "Volunteer - {}", volunteer_role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athlete_display() {
        let role = Role::Athlete {
            faculty: Faculty::Computing,
            sports: vec![Sport::Badminton, Sport::Chess],
        };
        assert_eq!(role.to_string(), "Athlete - Computing - Badminton, Chess");
    }

    #[test]
    fn test_referee_is_not_an_athlete() {
        let athlete = Role::Athlete { faculty: Faculty::Law, sports: vec![Sport::Tennis] };
        let referee = Role::Referee { faculty: Faculty::Law, sports: vec![Sport::Tennis] };
        assert_ne!(athlete, referee);
        assert_eq!(referee.to_string(), "Referee - Law - Tennis");
    }

    #[test]
    fn test_committee_display_with_and_without_faculty() {
        let sports = Role::Committee {
            branch: Branch::Sports,
            position: Position::ProjectDirector,
            faculty: Some(Faculty::Computing),
        };
        assert_eq!(sports.to_string(), "Committee - Sports - Project Director - Computing");

        let marketing = Role::Committee {
            branch: Branch::Marketing,
            position: Position::Member,
            faculty: None,
        };
        assert_eq!(marketing.to_string(), "Committee - Marketing - Member");
    }

    #[test]
    fn test_sponsor_and_volunteer_display() {
        let sponsor = Role::Sponsor { company_name: "Red Bull Asia".to_string() };
        assert_eq!(sponsor.to_string(), "Sponsor - Red Bull Asia");
        let volunteer = Role::Volunteer { volunteer_role: VolunteerRole::FirstAid };
        assert_eq!(volunteer.to_string(), "Volunteer - First Aid");
    }

    #[test]
    fn test_role_persists_by_codes() {
        let role = Role::Volunteer { volunteer_role: VolunteerRole::Photographer };
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, r#"{"kind":"volunteer","volunteer_role":"PHOTO"}"#);
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }

    #[test]
    fn test_repeated_sports_collapse() {
        let role = Role::athlete(Faculty::Computing, vec![Sport::Badminton, Sport::Chess, Sport::Badminton]).unwrap();
        assert_eq!(role.to_string(), "Athlete - Computing - Badminton, Chess");
    }

    #[test]
    fn test_committee_faculty_rule() {
        assert!(Role::committee(Branch::Sports, Position::ProjectDirector, None).is_err());
        assert!(Role::committee(Branch::Marketing, Position::Member, Some(Faculty::Computing)).is_err());
        assert!(Role::committee(Branch::Marketing, Position::Member, None).is_ok());
    }

    #[test]
    fn test_saved_roles_are_checked() {
        let bad = [
            r#"{"kind":"committee","branch":"MKT","position":"MEM","faculty":"COM"}"#,
            r#"{"kind":"committee","branch":"SPO","position":"PD"}"#,
            r#"{"kind":"athlete","faculty":"COM","sports":[]}"#,
            r#"{"kind":"sponsor","company_name":"  "}"#,
        ];
        for json in bad {
            assert!(serde_json::from_str::<Role>(json).is_err(), "accepted {json}");
        }

        let role: Role = serde_json::from_str(r#"{"kind":"referee","faculty":"LAW","sports":["TEN","TEN"]}"#).unwrap();
        assert_eq!(role, Role::Referee { faculty: Faculty::Law, sports: vec![Sport::Tennis] });
    }
}
