//! Comment block key/value store
//!
//! In-memory model of the comment block preceding an AIS sentence. Keys keep
//! their insertion order; writing an existing key replaces its value in place.

use chrono::{DateTime, Utc};
use tracing::debug;

/// Key of the timestamp entry, value in seconds since 1970
pub const TIMESTAMP_KEY: &str = "c";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentBlock {
    entries: Vec<(String, String)>,
}

impl CommentBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp entry (`c`), truncated to whole seconds
    pub fn add_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.add_string(TIMESTAMP_KEY, timestamp.timestamp().to_string());
    }

    pub fn add_string(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn add_int(&mut self, key: &str, value: i32) {
        self.add_string(key, value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Integer value of `key`, `None` if missing or not an integer
    pub fn get_int(&self, key: &str) -> Option<i32> {
        let value = self.get_string(key)?;
        match value.trim().parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                debug!("Ignoring non-integer comment block value {}={}", key, value);
                None
            }
        }
    }

    pub fn get_timestamp(&self) -> Option<DateTime<Utc>> {
        let value = self.get_string(TIMESTAMP_KEY)?;
        let seconds = value.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(seconds, 0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_replaces_in_place() {
        let mut cb = CommentBlock::new();
        cb.add_string("si", "a");
        cb.add_int("sb", 2190047);
        cb.add_string("si", "b");

        let entries: Vec<_> = cb.iter().collect();
        assert_eq!(entries, vec![("si", "b"), ("sb", "2190047")]);
    }

    #[test]
    fn typed_getters() {
        let mut cb = CommentBlock::new();
        cb.add_int("sb", -5);
        cb.add_string("si", "src");

        assert_eq!(cb.get_int("sb"), Some(-5));
        assert_eq!(cb.get_string("si"), Some("src"));
        assert_eq!(cb.get_int("si"), None);
        assert_eq!(cb.get_string("sc"), None);
        assert!(cb.contains("si"));
        assert!(!cb.contains("sc"));
    }

    #[test]
    fn timestamp_in_seconds() {
        let mut cb = CommentBlock::new();
        let time = DateTime::from_timestamp(1354719387, 250_000_000).unwrap();
        cb.add_timestamp(time);

        assert_eq!(cb.get_string(TIMESTAMP_KEY), Some("1354719387"));
        assert_eq!(
            cb.get_timestamp(),
            DateTime::from_timestamp(1354719387, 0)
        );
    }

    #[test]
    fn empty_block() {
        let cb = CommentBlock::default();
        assert!(cb.is_empty());
        assert_eq!(cb.len(), 0);
        assert_eq!(cb.get_timestamp(), None);
    }
}
