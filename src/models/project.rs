//! Project weight model.
//!
//! A project is a named bucket of work. Its weight sets how often it is
//! drawn for a free hour relative to the other projects.

use serde::{Deserialize, Serialize};

/// A project and its sampling weight.
///
/// Probability of a project being drawn for a slot is
/// `weight / sum(all weights)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectWeight {
    /// Project name (unique, non-empty).
    pub name: String,
    /// Relative sampling weight (positive).
    pub weight: u32,
}

impl ProjectWeight {
    /// Creates a project weight entry.
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// Share of the total weight held by this project.
    ///
    /// Returns `None` if `total` is zero.
    pub fn share_of(&self, total: u64) -> Option<f64> {
        if total == 0 {
            return None;
        }
        Some(f64::from(self.weight) / total as f64)
    }
}

/// Sum of weights across a project set.
pub fn total_weight(projects: &[ProjectWeight]) -> u64 {
    projects.iter().map(|p| u64::from(p.weight)).sum()
}
