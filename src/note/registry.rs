use super::entry::DeathEntry;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};

/// How long the cause of death stays writable after a name is written.
pub const CAUSE_WINDOW: Duration = Duration::from_millis(40);
/// How long the details of the death stay writable after a name is
/// written.
pub const DETAILS_WINDOW: Duration = Duration::from_millis(6040);

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("{0} is not a valid rule number")]
    InvalidRule(usize),
    #[error("no name has been written in the note")]
    EmptyNote,
    #[error("\"{0}\" is not written in the note")]
    NameNotFound(String),
}

pub type Result<T> = std::result::Result<T, NoteError>;

/// In-memory registry of written names.
///
/// Writing a name creates an entry stamped with the current instant; the
/// cause of death is then writable for [`CAUSE_WINDOW`] and the details
/// for [`DETAILS_WINDOW`], both measured from that first write. A write
/// after the window returns `Ok(false)` and changes nothing.
///
/// The registry is single-threaded; wrap it in
/// [`SharedDeathNote`](super::shared::SharedDeathNote) when several
/// threads need access.
pub struct DeathNote {
    entries: HashMap<String, DeathEntry>,
    order: Vec<String>,
    last_name: Option<String>,
}

impl DeathNote {
    /// Creates an empty note.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            last_name: None,
        }
    }

    /// Writes a name into the note.
    ///
    /// The first write of a name creates its entry with the default
    /// cause and details. Writing a name that is already present leaves
    /// its entry untouched (the original creation instant keeps
    /// governing both windows) but makes it the active target for
    /// [`write_death_cause`](Self::write_death_cause) and
    /// [`write_death_details`](Self::write_death_details) again.
    pub fn write_name(&mut self, name: &str) {
        if !self.entries.contains_key(name) {
            self.entries.insert(name.to_string(), DeathEntry::new());
            self.order.push(name.to_string());
            debug!(name, total = self.entries.len(), "name written");
        } else {
            trace!(name, "existing name re-written, retargeting");
        }
        self.last_name = Some(name.to_string());
    }

    /// Writes the cause of death for the most recently written name.
    ///
    /// Returns `Ok(true)` and updates the cause while the entry is
    /// inside [`CAUSE_WINDOW`]; `Ok(false)` once the window has elapsed.
    /// Fails with [`NoteError::EmptyNote`] if no name has ever been
    /// written.
    pub fn write_death_cause(&mut self, cause: &str) -> Result<bool> {
        let written = self.active_entry_mut()?.write_cause(cause, CAUSE_WINDOW);
        if !written {
            trace!(cause, "cause window elapsed, write rejected");
        }
        Ok(written)
    }

    /// Writes the details of the death for the most recently written
    /// name. Same contract as
    /// [`write_death_cause`](Self::write_death_cause), with
    /// [`DETAILS_WINDOW`].
    pub fn write_death_details(&mut self, details: &str) -> Result<bool> {
        let written = self.active_entry_mut()?.write_details(details, DETAILS_WINDOW);
        if !written {
            trace!(details, "details window elapsed, write rejected");
        }
        Ok(written)
    }

    /// Returns the cause of death recorded for `name`, or the default
    /// cause if none was written in time.
    pub fn death_cause(&self, name: &str) -> Result<&str> {
        self.entries
            .get(name)
            .map(|entry| entry.cause())
            .ok_or_else(|| NoteError::NameNotFound(name.to_string()))
    }

    /// Returns the details of the death recorded for `name`, or the
    /// default details if none were written in time.
    pub fn death_details(&self, name: &str) -> Result<&str> {
        self.entries
            .get(name)
            .map(|entry| entry.details())
            .ok_or_else(|| NoteError::NameNotFound(name.to_string()))
    }

    /// True if `name` has ever been written into the note.
    pub fn is_name_written(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The most recently written name, if any.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Names in the order they were first written.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Point-in-time view of every entry, in insertion order.
    pub fn snapshot(&self) -> Vec<EntrySnapshot> {
        self.order
            .iter()
            .map(|name| {
                let entry = &self.entries[name];
                EntrySnapshot {
                    name: name.clone(),
                    cause: entry.cause().to_string(),
                    details: entry.details().to_string(),
                    age_ms: entry.age().as_millis() as u64,
                }
            })
            .collect()
    }

    /// Returns statistics about the current state of the note.
    pub fn stats(&self) -> NoteStats {
        NoteStats {
            total_names: self.entries.len(),
            cause_frozen: self
                .entries
                .values()
                .filter(|entry| !entry.within(CAUSE_WINDOW))
                .count(),
            details_frozen: self
                .entries
                .values()
                .filter(|entry| !entry.within(DETAILS_WINDOW))
                .count(),
        }
    }

    fn active_entry_mut(&mut self) -> Result<&mut DeathEntry> {
        let name = self.last_name.as_deref().ok_or(NoteError::EmptyNote)?;
        self.entries.get_mut(name).ok_or(NoteError::EmptyNote)
    }

    #[cfg(test)]
    fn backdate(&mut self, name: &str, by: Duration) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.backdate(by);
        }
    }
}

/// One row of [`DeathNote::snapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct EntrySnapshot {
    pub name: String,
    pub cause: String,
    pub details: String,
    pub age_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteStats {
    pub total_names: usize,
    pub cause_frozen: usize,
    pub details_frozen: usize,
}
