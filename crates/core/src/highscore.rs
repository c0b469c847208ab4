//! High-score record and the store contract
//!
//! The core never touches the filesystem. A store reports one of three outcomes on
//! load: a record, no record yet, or a failure. Callers fall back to
//! [`HighScore::default`] for the last two.

use std::convert::Infallible;
use std::fmt::Display;

/// Best score ever achieved and who achieved it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HighScore {
    pub score: u32,
    pub name: String,
}

impl HighScore {
    pub fn new(score: u32, name: impl Into<String>) -> Self {
        Self {
            score,
            name: name.into(),
        }
    }

    /// A final score replaces the record only when strictly greater.
    pub fn is_beaten_by(&self, score: u32) -> bool {
        score > self.score
    }
}

/// Load/save access to the persisted best record.
pub trait HighScoreStore {
    type Error: Display;

    /// `Ok(None)` when no record has been saved yet.
    fn load(&self) -> Result<Option<HighScore>, Self::Error>;

    fn save(&mut self, record: &HighScore) -> Result<(), Self::Error>;
}

/// In-memory store (headless sessions and tests).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<HighScore>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: HighScore) -> Self {
        Self {
            record: Some(record),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&HighScore> {
        self.record.as_ref()
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> Result<Option<HighScore>, Self::Error> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &HighScore) -> Result<(), Self::Error> {
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        assert_eq!(HighScore::default(), HighScore::new(0, ""));
    }

    #[test]
    fn test_beaten_only_when_strictly_greater() {
        let best = HighScore::new(500, "Ada");
        assert!(!best.is_beaten_by(400));
        assert!(!best.is_beaten_by(500));
        assert!(best.is_beaten_by(600));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(&HighScore::new(500, "Ada")).unwrap();
        assert_eq!(store.load().unwrap(), Some(HighScore::new(500, "Ada")));
        assert_eq!(store.saves(), 1);
    }
}
