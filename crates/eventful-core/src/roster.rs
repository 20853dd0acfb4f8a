//! In-memory person and event lists plus the filtered views the user sees.
//!
//! Indices typed by the user address the *displayed* lists, so every lookup
//! goes through the current filter. Any structural change can shift
//! positions; callers resolve an index again after each mutation.

use crate::command::Index;
use crate::models::{Event, Person};

#[derive(Debug, Default, Clone)]
pub struct Roster {
    persons: Vec<Person>,
    events: Vec<Event>,
    person_filter: Option<Vec<String>>,
    event_filter: Option<Vec<String>>,
}

impl Roster {
    pub fn new(persons: Vec<Person>, events: Vec<Event>) -> Self {
        Self { persons, events, person_filter: None, event_filter: None }
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    // ===== Displayed views =====

    fn displayed_person_positions(&self) -> Vec<usize> {
        (0..self.persons.len())
            .filter(|&i| match &self.person_filter {
                Some(keywords) => self.persons[i].matches_any(keywords),
                None => true,
            })
            .collect()
    }

    fn displayed_event_positions(&self) -> Vec<usize> {
        (0..self.events.len())
            .filter(|&i| match &self.event_filter {
                Some(keywords) => self.events[i].matches_any(keywords),
                None => true,
            })
            .collect()
    }

    pub fn displayed_persons(&self) -> Vec<&Person> {
        self.displayed_person_positions().into_iter().map(|i| &self.persons[i]).collect()
    }

    pub fn displayed_events(&self) -> Vec<&Event> {
        self.displayed_event_positions().into_iter().map(|i| &self.events[i]).collect()
    }

    /// Map a displayed person index to its position in the full list.
    pub fn resolve_person(&self, index: Index) -> Option<usize> {
        self.displayed_person_positions().get(index.zero_based()).copied()
    }

    /// Map a displayed event index to its position in the full list.
    pub fn resolve_event(&self, index: Index) -> Option<usize> {
        self.displayed_event_positions().get(index.zero_based()).copied()
    }

    /// `None` shows everything.
    pub fn set_person_filter(&mut self, keywords: Option<Vec<String>>) {
        self.person_filter = keywords;
    }

    pub fn set_event_filter(&mut self, keywords: Option<Vec<String>>) {
        self.event_filter = keywords;
    }

    // ===== Persons =====

    pub fn person_at(&self, position: usize) -> &Person {
        &self.persons[position]
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) {
        self.persons.push(person);
    }

    pub fn replace_person_at(&mut self, position: usize, person: Person) {
        self.persons[position] = person;
    }

    pub fn remove_person_at(&mut self, position: usize) -> Person {
        self.persons.remove(position)
    }

    // ===== Events =====

    pub fn event_at(&self, position: usize) -> &Event {
        &self.events[position]
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.events.iter().any(|e| e.is_same_event(event))
    }

    /// Position of the event `person` currently takes part in.
    pub fn event_of(&self, person: &Person) -> Option<usize> {
        self.events.iter().position(|e| e.has_participant(person))
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn replace_event_at(&mut self, position: usize, event: Event) {
        self.events[position] = event;
    }

    pub fn remove_event_at(&mut self, position: usize) -> Event {
        self.events.remove(position)
    }

    pub fn clear(&mut self) {
        self.persons.clear();
        self.events.clear();
        self.person_filter = None;
        self.event_filter = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, VolunteerRole};

    fn person(name: &str) -> Person {
        Person::new(
            name.to_string(),
            "123".to_string(),
            "a@b.co".to_string(),
            vec![Role::Volunteer { volunteer_role: VolunteerRole::Usher }],
        )
    }

    #[test]
    fn test_indices_follow_the_filter() {
        let mut roster = Roster::new(vec![person("Alex"), person("Bernice"), person("Alexis")], Vec::new());
        let second = Index::from_one_based(2).unwrap();
        assert_eq!(roster.resolve_person(second), Some(1));

        roster.set_person_filter(Some(vec!["alex".to_string()]));
        assert_eq!(roster.displayed_persons().len(), 2);
        assert_eq!(roster.resolve_person(second), Some(2));
        assert_eq!(roster.resolve_person(Index::from_one_based(3).unwrap()), None);

        roster.set_person_filter(None);
        assert_eq!(roster.displayed_persons().len(), 3);
    }

    #[test]
    fn test_has_person_ignores_case() {
        let roster = Roster::new(vec![person("Alex")], Vec::new());
        assert!(roster.has_person(&person("ALEX")));
        assert!(!roster.has_person(&person("Bo")));
    }
}
