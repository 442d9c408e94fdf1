//! Aggregate summary handed to the post-session collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::WorkoutDescriptor;

/// Produced once, on the multi-workout terminal transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub completed_count: usize,
    /// Best-effort sum of the leading integer in each item's free-text
    /// duration label ("12-14 min" contributes 12). A heuristic, not an
    /// accurate time total.
    pub duration_label_sum_min: u64,
    /// Active seconds actually measured across all exercises.
    pub active_secs: u64,
    /// Snapshot of every descriptor traversed, in session order.
    pub items: Vec<WorkoutDescriptor>,
    pub completed_at: DateTime<Utc>,
}

/// Leading integer of a free-text duration label, 0 if it has none.
pub fn leading_minutes(label: &str) -> u64 {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integer() {
        assert_eq!(leading_minutes("12-14 min"), 12);
        assert_eq!(leading_minutes("8 min"), 8);
        assert_eq!(leading_minutes("  20 min"), 20);
    }

    #[test]
    fn label_without_digits_contributes_zero() {
        assert_eq!(leading_minutes("about ten minutes"), 0);
        assert_eq!(leading_minutes(""), 0);
    }
}
