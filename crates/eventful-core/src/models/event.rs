use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::codes::{Faculty, Sport};
use super::person::Person;
use crate::error::ParseError;
use crate::parser::fields::parse_text;
use crate::utils::contains_ignore_case;

/// Input and display format for event date/times.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The two faculties facing each other in a match. Always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(Faculty, Faculty)", into = "(Faculty, Faculty)")]
pub struct Teams {
    team_a: Faculty,
    team_b: Faculty,
}

impl Teams {
    /// Returns `None` when both sides are the same faculty.
    pub fn new(team_a: Faculty, team_b: Faculty) -> Option<Self> {
        (team_a != team_b).then_some(Self { team_a, team_b })
    }

    pub fn team_a(&self) -> Faculty {
        self.team_a
    }

    pub fn team_b(&self) -> Faculty {
        self.team_b
    }
}

impl TryFrom<(Faculty, Faculty)> for Teams {
    type Error = String;

    fn try_from((team_a, team_b): (Faculty, Faculty)) -> Result<Self, Self::Error> {
        Teams::new(team_a, team_b).ok_or_else(|| format!("team {} cannot play itself", team_a.code()))
    }
}

impl From<Teams> for (Faculty, Faculty) {
    fn from(teams: Teams) -> Self {
        (teams.team_a, teams.team_b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    pub name: String,
    pub sport: Sport,
    pub teams: Teams,
    pub venue: String,
    pub date_time: NaiveDateTime,
    pub participants: Vec<Person>,
}

#[derive(Deserialize)]
struct RawEvent {
    name: String,
    sport: Sport,
    teams: Teams,
    venue: String,
    date_time: NaiveDateTime,
    #[serde(default)]
    participants: Vec<Person>,
}

impl TryFrom<RawEvent> for Event {
    type Error = ParseError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let mut event = Event::new(
            parse_text(&raw.name, "event name")?,
            raw.sport,
            raw.teams,
            parse_text(&raw.venue, "venue")?,
            raw.date_time,
        );
        for person in raw.participants {
            event = event.with_participant(person);
        }
        Ok(event)
    }
}

impl Event {
    pub fn new(name: String, sport: Sport, teams: Teams, venue: String, date_time: NaiveDateTime) -> Self {
        Self { name, sport, teams, venue, date_time, participants: Vec::new() }
    }

    pub fn date_time_display(&self) -> String {
        self.date_time.format(DATE_TIME_FORMAT).to_string()
    }

    pub fn is_same_event(&self, other: &Event) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }

    pub fn has_participant(&self, person: &Person) -> bool {
        self.participants.iter().any(|p| p.is_same_person(person))
    }

    /// Returns a copy with `person` appended (no-op if already present).
    pub fn with_participant(&self, person: Person) -> Self {
        let mut next = self.clone();
        if !next.has_participant(&person) {
            next.participants.push(person);
        }
        next
    }

    /// Returns a copy without `person`.
    pub fn without_participant(&self, person: &Person) -> Self {
        let mut next = self.clone();
        next.participants.retain(|p| !p.is_same_person(person));
        next
    }

    /// Returns a copy with `old` swapped for `new` in place, keeping order.
    pub fn with_participant_replaced(&self, old: &Person, new: Person) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.participants.iter_mut().find(|p| p.is_same_person(old)) {
            *slot = new;
        }
        next
    }

    /// True when any keyword occurs in the name, sport, venue or a participant's name.
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        keywords.iter().any(|k| {
            contains_ignore_case(&self.name, k)
                || contains_ignore_case(self.sport.name(), k)
                || contains_ignore_case(&self.venue, k)
                || self.participants.iter().any(|p| contains_ignore_case(&p.name, k))
        })
    }
}
