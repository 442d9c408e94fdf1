use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;
use crate::session::{SessionMode, SessionSummary};

/// Every state change in the engine produces an Event. The host surface
/// renders them; the post-session collaborator consumes the completion
/// variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CartItemAdded {
        id: String,
        name: String,
        at: DateTime<Utc>,
    },
    CartItemRemoved {
        id: String,
        at: DateTime<Utc>,
    },
    CartCleared {
        at: DateTime<Utc>,
    },
    SessionStarted {
        session_id: String,
        mode: SessionMode,
        workout_count: usize,
        first_workout: String,
        at: DateTime<Utc>,
    },
    /// One exercise done, the next one is now presented.
    ExerciseAdvanced {
        session_id: String,
        index: usize,
        workout: String,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    /// Multi-workout session reached its terminal state.
    SessionCompleted {
        summary: SessionSummary,
        at: DateTime<Utc>,
    },
    /// Single-workout completion report ("save to history", no checkout).
    WorkoutCompleted {
        name: String,
        equipment: String,
        difficulty: Difficulty,
        duration_label: String,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    SessionCancelled {
        session_id: String,
        index: usize,
        at: DateTime<Utc>,
    },
    TimerStarted {
        at: DateTime<Utc>,
    },
    TimerPaused {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
}
