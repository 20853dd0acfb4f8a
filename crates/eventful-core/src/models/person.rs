use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::error::ParseError;
use crate::parser::fields::{parse_email, parse_name, parse_phone};
use crate::parser::role::ROLE_USAGE;
use crate::utils::contains_ignore_case;

/// A festival participant with contact details and one or more roles.
///
/// Values are only produced by a successful parse (or by loading saved data
/// that passes the same field checks) and are replaced wholesale on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPerson")]
pub struct Person {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub roles: Vec<Role>,
}

#[derive(Deserialize)]
struct RawPerson {
    name: String,
    phone: String,
    email: String,
    roles: Vec<Role>,
}

impl TryFrom<RawPerson> for Person {
    type Error = ParseError;

    fn try_from(raw: RawPerson) -> Result<Self, Self::Error> {
        if raw.roles.is_empty() {
            return Err(ParseError::MissingRequiredField { field: "role", usage: ROLE_USAGE });
        }
        Ok(Person::new(
            parse_name(&raw.name)?,
            parse_phone(&raw.phone)?,
            parse_email(&raw.email)?,
            raw.roles,
        ))
    }
}

impl Person {
    /// Build a person, dropping repeated roles while keeping first-seen order.
    pub fn new(name: String, phone: String, email: String, roles: Vec<Role>) -> Self {
        let mut unique: Vec<Role> = Vec::with_capacity(roles.len());
        for role in roles {
            if !unique.contains(&role) {
                unique.push(role);
            }
        }
        Self { name, phone, email, roles: unique }
    }

    /// Two entries describe the same person when their names match, ignoring case.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }

    /// True when any keyword occurs in the name, phone, email or any role text.
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        keywords.iter().any(|k| {
            contains_ignore_case(&self.name, k)
                || contains_ignore_case(&self.phone, k)
                || contains_ignore_case(&self.email, k)
                || self.roles.iter().any(|r| contains_ignore_case(&r.to_string(), k))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Faculty, Sport, VolunteerRole};

    fn alex() -> Person {
        Person::new(
            "Alex Yeoh".to_string(),
            "87438807".to_string(),
            "alexyeoh@example.com".to_string(),
            vec![Role::Athlete {
                faculty: Faculty::Science,
                sports: vec![Sport::Badminton],
            }],
        )
    }

    #[test]
    fn test_new_drops_repeated_roles() {
        let usher = Role::Volunteer { volunteer_role: VolunteerRole::Usher };
        let emcee = Role::Volunteer { volunteer_role: VolunteerRole::Emcee };
        let p = Person::new(
            "Bo".to_string(),
            "123".to_string(),
            "bo@x.io".to_string(),
            vec![usher.clone(), emcee.clone(), usher.clone()],
        );
        assert_eq!(p.roles, vec![usher, emcee]);
    }

    #[test]
    fn test_matches_any_searches_every_field() {
        let p = alex();
        assert!(p.matches_any(&["ALEX".to_string()]));
        assert!(p.matches_any(&["8743".to_string()]));
        assert!(p.matches_any(&["example.COM".to_string()]));
        assert!(p.matches_any(&["science".to_string()]));
        assert!(!p.matches_any(&["chess".to_string()]));
    }

    #[test]
    fn test_matches_any_is_or_across_keywords() {
        let p = alex();
        assert!(p.matches_any(&["nobody".to_string(), "yeoh".to_string()]));
        assert!(!p.matches_any(&["nobody".to_string(), "nothing".to_string()]));
    }

    #[test]
    fn test_saved_person_is_checked() {
        let valid = r#"{"name":"Bo","phone":"123","email":"bo@example.com",
                        "roles":[{"kind":"volunteer","volunteer_role":"MC"}]}"#;
        assert_eq!(serde_json::from_str::<Person>(valid).unwrap().name, "Bo");

        let bad = [
            r#"{"name":"","phone":"123","email":"bo@example.com","roles":[{"kind":"volunteer","volunteer_role":"MC"}]}"#,
            r#"{"name":"Bo","phone":"x","email":"bo@example.com","roles":[{"kind":"volunteer","volunteer_role":"MC"}]}"#,
            r#"{"name":"Bo","phone":"123","email":"not-an-email","roles":[{"kind":"volunteer","volunteer_role":"MC"}]}"#,
            r#"{"name":"Bo","phone":"123","email":"bo@example.com","roles":[]}"#,
        ];
        for json in bad {
            assert!(serde_json::from_str::<Person>(json).is_err(), "accepted {json}");
        }
    }

    #[test]
    fn test_is_same_person_ignores_case() {
        let mut other = alex();
        other.name = "alex yeoh".to_string();
        other.phone = "999".to_string();
        assert!(alex().is_same_person(&other));
    }
}
