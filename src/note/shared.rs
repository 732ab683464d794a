use super::registry::{DeathNote, EntrySnapshot, NoteStats, Result};
use parking_lot::RwLock;

/// Coarse lock around [`DeathNote`] for callers that share the note
/// between threads.
///
/// Every operation takes the lock for its full duration; reads return
/// owned values so no guard escapes. The plain [`DeathNote`] stays the
/// right choice for single-threaded use.
pub struct SharedDeathNote {
    inner: RwLock<DeathNote>,
}

impl SharedDeathNote {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DeathNote::new()),
        }
    }

    pub fn write_name(&self, name: &str) {
        self.inner.write().write_name(name);
    }

    pub fn write_death_cause(&self, cause: &str) -> Result<bool> {
        self.inner.write().write_death_cause(cause)
    }

    pub fn write_death_details(&self, details: &str) -> Result<bool> {
        self.inner.write().write_death_details(details)
    }

    pub fn death_cause(&self, name: &str) -> Result<String> {
        self.inner.read().death_cause(name).map(str::to_string)
    }

    pub fn death_details(&self, name: &str) -> Result<String> {
        self.inner.read().death_details(name).map(str::to_string)
    }

    pub fn is_name_written(&self, name: &str) -> bool {
        self.inner.read().is_name_written(name)
    }

    pub fn snapshot(&self) -> Vec<EntrySnapshot> {
        self.inner.read().snapshot()
    }

    pub fn stats(&self) -> NoteStats {
        self.inner.read().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::entry::DEFAULT_CAUSE;

    #[test]
    fn test_shared_note_matches_plain_semantics() {
        let note = SharedDeathNote::new();
        assert!(!note.is_name_written("Pierino"));
        note.write_name("Pierino");
        assert!(note.is_name_written("Pierino"));
        assert_eq!(note.death_cause("Pierino").unwrap(), DEFAULT_CAUSE);
        assert!(note.write_death_cause("karting accident").unwrap());
        assert_eq!(note.death_cause("Pierino").unwrap(), "karting accident");
    }

    #[test]
    fn test_shared_note_across_threads() {
        let note = SharedDeathNote::new();
        std::thread::scope(|scope| {
            for i in 0..4 {
                let note = &note;
                scope.spawn(move || {
                    note.write_name(&format!("name-{i}"));
                });
            }
        });
        assert_eq!(note.stats().total_names, 4);
        for i in 0..4 {
            assert!(note.is_name_written(&format!("name-{i}")));
        }
    }
}
