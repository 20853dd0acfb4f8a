//! File-backed persistence for persons and events.
//!
//! Data is kept as a single pretty-printed JSON document. Enumerations are
//! stored by their short codes, so the file stays readable and stable across
//! renames of display names.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Event, Person};

/// Load/save contract the command shell depends on.
pub trait Storage {
    fn load_all(&self) -> Result<(Vec<Person>, Vec<Event>)>;
    fn save_all(&self, persons: &[Person], events: &[Event]) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SavedData {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    events: Vec<Event>,
    saved_at: Option<DateTime<Utc>>,
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load_all(&self) -> Result<(Vec<Person>, Vec<Event>)> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No data file yet, starting empty");
            return Ok((Vec::new(), Vec::new()));
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;
        let data: SavedData = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse data file: {}", self.path.display()))?;

        debug!(
            path = %self.path.display(),
            persons = data.persons.len(),
            events = data.events.len(),
            "Loaded data file"
        );
        Ok((data.persons, data.events))
    }

    fn save_all(&self, persons: &[Person], events: &[Event]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = SavedData {
            persons: persons.to_vec(),
            events: events.to_vec(),
            saved_at: Some(Utc::now()),
        };
        let contents = serde_json::to_string_pretty(&data)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write data file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), persons = persons.len(), events = events.len(), "Saved data file");
        Ok(())
    }
}
