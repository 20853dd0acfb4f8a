//! The read-eval loop: parse a line, execute it, show the result, persist.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use eventful_core::messages::{format_event, format_person};
use eventful_core::{execute, parse_command, Command, CommandError, DisplaySink, Roster, Storage};

const PROMPT: &str = "> ";

/// Writes each message on its own line to stdout.
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn display(&mut self, message: &str) {
        println!("{}", message);
    }

    fn prompt(&mut self, prompt: &str) {
        let mut stdout = io::stdout();
        if write!(stdout, "{}", prompt).and_then(|_| stdout.flush()).is_err() {
            warn!("Could not write prompt to stdout");
        }
    }
}

pub struct Shell<S: Storage, D: DisplaySink> {
    roster: Roster,
    storage: S,
    sink: D,
}

impl<S: Storage, D: DisplaySink> Shell<S, D> {
    pub fn new(roster: Roster, storage: S, sink: D) -> Self {
        Self { roster, storage, sink }
    }

    /// Process lines until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.sink.prompt(PROMPT);
        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() && self.handle_line(&line) {
                break;
            }
            self.sink.prompt(PROMPT);
        }
        Ok(())
    }

    /// Returns true when the shell should stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Rejected input");
                self.sink.display(&e.to_string());
                return false;
            }
        };

        let shows_persons = matches!(command, Command::Find { .. } | Command::List);
        let shows_events = matches!(command, Command::FindEvent { .. } | Command::ListEvents);

        let result = match execute(command, &mut self.roster) {
            Ok(result) => result,
            Err(e) => {
                self.sink.display(&e.to_string());
                return false;
            }
        };

        if result.mutated {
            if let Err(e) = self.storage.save_all(self.roster.persons(), self.roster.events()) {
                warn!(error = %e, "Save failed");
                self.sink.display(&CommandError::Storage(e).to_string());
            }
        }

        self.sink.display(&result.feedback);
        if shows_persons {
            self.show_persons();
        }
        if shows_events {
            self.show_events();
        }
        result.exit
    }

    fn show_persons(&mut self) {
        let lines: Vec<String> = self
            .roster
            .displayed_persons()
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, format_person(p)))
            .collect();
        for line in lines {
            self.sink.display(&line);
        }
    }

    fn show_events(&mut self) {
        let lines: Vec<String> = self
            .roster
            .displayed_events()
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {}", i + 1, format_event(e)))
            .collect();
        for line in lines {
            self.sink.display(&line);
        }
    }

    #[cfg(test)]
    fn roster(&self) -> &Roster {
        &self.roster
    }
}
