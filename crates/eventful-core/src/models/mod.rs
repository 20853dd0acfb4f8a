//! Domain model for the festival roster.
//!
//! - `Faculty`, `Sport`, `Branch`, `Position`, `VolunteerRole`: fixed code tables
//! - `Role`: what a person does (athlete, referee, committee, sponsor, volunteer)
//! - `Person`: contact details plus roles
//! - `Event`, `Teams`: a match between two faculties and its participants

pub mod codes;
pub mod event;
pub mod person;
pub mod role;

pub use codes::{Branch, Faculty, Position, Sport, VolunteerRole};
pub use event::{Event, Teams, DATE_TIME_FORMAT};
pub use person::Person;
pub use role::Role;
