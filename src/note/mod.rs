//! Core logic for the note: entries, the registry, its rules, and the
//! lock-wrapped variant.

pub mod entry;
pub mod registry;
pub mod rules;
pub mod shared;

pub use entry::{DeathEntry, DEFAULT_CAUSE, DEFAULT_DETAILS};
pub use registry::{
    DeathNote, EntrySnapshot, NoteError, NoteStats, Result, CAUSE_WINDOW, DETAILS_WINDOW,
};
pub use rules::{rule, RULES};
pub use shared::SharedDeathNote;
