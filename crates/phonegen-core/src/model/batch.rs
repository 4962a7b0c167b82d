// ── Generation batch ──
//
// `BatchSize` carries the 1..=10000 bound in the type so the generator
// never sees an invalid count. `Batch` is the transient output of one
// generation action.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A validated number of phones to generate in one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct BatchSize(u32);

impl BatchSize {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10_000;
    pub const DEFAULT: Self = Self(10);

    /// Validate a raw count.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        u32::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(CoreError::InvalidCount {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    /// Parse user text (surrounding whitespace allowed). Returns `None`
    /// for anything that is not an integer in range.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<i64>().ok().and_then(|v| Self::new(v).ok())
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        // u32 -> usize is lossless on every supported target
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for BatchSize {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BatchSize> for u32 {
    fn from(size: BatchSize) -> Self {
        size.0
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered output of one generation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    pub country_id: &'static str,
    pub country_name: &'static str,
    pub numbers: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Newline-joined numbers, no trailing newline. Used for both
    /// "copy all" and file export.
    pub fn to_text(&self) -> String {
        self.numbers.join("\n")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn batch_size_bounds() {
        assert!(BatchSize::new(0).is_err());
        assert!(BatchSize::new(-5).is_err());
        assert!(BatchSize::new(10_001).is_err());
        assert_eq!(BatchSize::new(1).unwrap().get(), 1);
        assert_eq!(BatchSize::new(10_000).unwrap().get(), 10_000);
    }

    #[test]
    fn batch_size_rejects_values_beyond_u32() {
        assert!(BatchSize::new(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn batch_size_parse() {
        assert_eq!(BatchSize::parse(" 25 "), Some(BatchSize::new(25).unwrap()));
        assert_eq!(BatchSize::parse("abc"), None);
        assert_eq!(BatchSize::parse(""), None);
        assert_eq!(BatchSize::parse("0"), None);
        assert_eq!(BatchSize::parse("20000"), None);
    }

    #[test]
    fn batch_size_default_is_ten() {
        assert_eq!(BatchSize::default().get(), 10);
    }

    #[test]
    fn batch_size_serde_round_trip_validates() {
        let size: BatchSize = serde_json::from_str("42").unwrap();
        assert_eq!(size.get(), 42);
        assert!(serde_json::from_str::<BatchSize>("0").is_err());
        assert_eq!(serde_json::to_string(&size).unwrap(), "42");
    }

    #[test]
    fn invalid_count_message_names_bounds() {
        let err = BatchSize::new(0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid count 0: must be between 1 and 10000");
    }

    #[test]
    fn batch_text_has_no_trailing_newline() {
        let batch = Batch {
            country_id: "zz",
            country_name: "Sample",
            numbers: vec!["+99 1".into(), "+99 2".into()],
            generated_at: Utc::now(),
        };
        assert_eq!(batch.to_text(), "+99 1\n+99 2");
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
    }
}
