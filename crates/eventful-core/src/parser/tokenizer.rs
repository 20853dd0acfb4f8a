//! Splits command arguments into a preamble plus prefix-keyed values.
//!
//! A prefix is only recognised when it starts the argument string or follows
//! whitespace, so `alex@n/a.com` does not contain an `n/` field.

use std::collections::HashMap;

use crate::error::ParseError;

/// Field markers understood by the command grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prefix {
    Name,
    Phone,
    Email,
    Role,
    Event,
    Sport,
    Team,
    Venue,
    DateTime,
}

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Phone => "p/",
            Prefix::Email => "m/",
            Prefix::Role => "r/",
            Prefix::Event => "e/",
            Prefix::Sport => "s/",
            Prefix::Team => "t/",
            Prefix::Venue => "v/",
            Prefix::DateTime => "d/",
        }
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tokenized arguments: free text before the first prefix, then every value
/// seen for each prefix in the order it appeared.
#[derive(Debug, Default, Clone)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values.get(&prefix).and_then(|v| v.last()).map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails with every prefix in `single_valued` that was given more than once.
    pub fn verify_no_duplicates(&self, single_valued: &[Prefix]) -> Result<(), ParseError> {
        let mut duplicated: Vec<Prefix> = single_valued
            .iter()
            .copied()
            .filter(|p| self.all_values(*p).len() > 1)
            .collect();
        if duplicated.is_empty() {
            return Ok(());
        }
        duplicated.sort();
        duplicated.dedup();
        Err(ParseError::DuplicatePrefix(duplicated))
    }
}

/// Tokenize `args` (the text after the command word) against `prefixes`.
/// Values are trimmed; empty values are kept so callers can report them.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    // Leading space lets a prefix at the very start match like any other.
    let padded = format!(" {}", args);

    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let marker = format!(" {}", prefix.as_str());
        let mut from = 0;
        while let Some(offset) = padded[from..].find(&marker) {
            let at = from + offset + 1;
            positions.push((at, prefix));
            from = at;
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let mut map = ArgumentMultimap::default();
    let first = positions.first().map(|(at, _)| *at).unwrap_or(padded.len());
    map.preamble = padded[..first].trim().to_string();

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.as_str().len();
        let end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(padded.len());
        map.put(*prefix, padded[start..end].trim().to_string());
    }
    map
}
