use std::time::{Duration, Instant};

/// Cause recorded for every entry until a cause is written in time.
pub const DEFAULT_CAUSE: &str = "heart attack";
/// Details recorded for every entry until details are written in time.
pub const DEFAULT_DETAILS: &str = "";

/// A single entry of the note: when the name was written, and the cause
/// and details of the death.
///
/// The creation instant is stamped once and never changes. Each field is
/// writable only while the entry is younger than the window passed to
/// the write, and keeps its current value forever after.
#[derive(Debug, Clone)]
pub struct DeathEntry {
    created: Instant,
    cause: String,
    details: String,
}

impl DeathEntry {
    /// Creates a new entry stamped with the current instant and the
    /// default cause and details.
    pub fn new() -> Self {
        Self {
            created: Instant::now(),
            cause: DEFAULT_CAUSE.to_string(),
            details: DEFAULT_DETAILS.to_string(),
        }
    }

    // Getters
    pub fn cause(&self) -> &str { &self.cause }
    pub fn details(&self) -> &str { &self.details }

    /// Age of this entry relative to now.
    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }

    /// True while the entry's age is within the given window, boundary
    /// included.
    pub fn within(&self, window: Duration) -> bool {
        self.age() <= window
    }

    /// Overwrites the cause if the entry is still inside `window`.
    /// Returns false and leaves the cause untouched otherwise.
    pub fn write_cause(&mut self, cause: &str, window: Duration) -> bool {
        if self.within(window) {
            self.cause = cause.to_string();
            true
        } else {
            false
        }
    }

    /// Overwrites the details if the entry is still inside `window`.
    /// Returns false and leaves the details untouched otherwise.
    pub fn write_details(&mut self, details: &str, window: Duration) -> bool {
        if self.within(window) {
            self.details = details.to_string();
            true
        } else {
            false
        }
    }

    /// Shifts the creation instant into the past, so expiry can be
    /// tested without sleeping.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.created -= by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(40);

    #[test]
    fn test_entry_defaults() {
        let entry = DeathEntry::new();
        assert_eq!(entry.cause(), DEFAULT_CAUSE);
        assert_eq!(entry.details(), DEFAULT_DETAILS);
        assert!(entry.within(Duration::from_secs(1)));
    }

    #[test]
    fn test_write_inside_window() {
        let mut entry = DeathEntry::new();
        assert!(entry.write_cause("karting accident", Duration::from_secs(10)));
        assert_eq!(entry.cause(), "karting accident");
        assert!(entry.write_details("ran for too long", Duration::from_secs(10)));
        assert_eq!(entry.details(), "ran for too long");
    }

    #[test]
    fn test_write_after_window_is_rejected() {
        let mut entry = DeathEntry::new();
        entry.backdate(WINDOW + Duration::from_millis(10));
        assert!(!entry.write_cause("explosion", WINDOW));
        assert_eq!(entry.cause(), DEFAULT_CAUSE);
        assert!(!entry.write_details("very very hot", WINDOW));
        assert_eq!(entry.details(), DEFAULT_DETAILS);
    }

    #[test]
    fn test_windows_are_independent() {
        let mut entry = DeathEntry::new();
        entry.backdate(Duration::from_millis(100));
        assert!(!entry.write_cause("explosion", WINDOW));
        assert!(entry.write_details("very very hot", Duration::from_secs(6)));
        assert_eq!(entry.cause(), DEFAULT_CAUSE);
        assert_eq!(entry.details(), "very very hot");
    }

    #[test]
    fn test_age_grows_from_creation() {
        let mut entry = DeathEntry::new();
        entry.backdate(Duration::from_secs(5));
        assert!(entry.age() >= Duration::from_secs(5));
    }
}
