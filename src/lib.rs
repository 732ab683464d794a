//! In-memory registry of names with timed-write death fields.
//!
//! Writing a name creates an entry stamped with a monotonic creation
//! instant. The cause of death can be overwritten for a short window
//! after that first write, the details for a longer one; once a window
//! has elapsed the field keeps its value forever. Writes past the window
//! are an expected outcome and report `Ok(false)` rather than an error.
//!
//! ```
//! use deathnote::{DeathNote, DEFAULT_CAUSE};
//!
//! let mut note = DeathNote::new();
//! note.write_name("Pierino");
//! assert_eq!(note.death_cause("Pierino").unwrap(), DEFAULT_CAUSE);
//! assert!(note.write_death_cause("karting accident").unwrap());
//! assert_eq!(note.death_cause("Pierino").unwrap(), "karting accident");
//! ```

pub mod note;

pub use note::{
    rule, DeathEntry, DeathNote, EntrySnapshot, NoteError, NoteStats, Result, SharedDeathNote,
    CAUSE_WINDOW, DEFAULT_CAUSE, DEFAULT_DETAILS, DETAILS_WINDOW, RULES,
};
