//! Day label model.
//!
//! A day label is an opaque key ("Monday", "2024-06-03", "Week 2 Tue").
//! It is never parsed as a date; work windows and meetings are joined
//! on it by plain string equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a scheduled day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayLabel(String);

impl DayLabel {
    /// Creates a day label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DayLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DayLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for DayLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for DayLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DayLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
