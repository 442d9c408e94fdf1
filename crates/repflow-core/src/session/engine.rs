//! Session state machine.
//!
//! Drives a user through an ordered, fixed-at-start list of workouts.
//! The machine is `Active` at exactly one index, the index only ever
//! increases by 1, and the terminal transition differs by mode: a
//! multi-workout session checks the cart out (clears it), a single
//! workout is a save-to-history action that leaves the cart alone.
//!
//! Commands return `Option<Event>`; `None` means the command was not
//! valid in the current state and nothing changed.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartStore;
use crate::catalog::WorkoutDescriptor;
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::session::summary::{leading_minutes, SessionSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// One workout, no sequencing. Completion is a history save.
    Single,
    /// Ordered multi-workout run. Completion is a cart checkout.
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Active,
    /// Terminal: multi-workout session finished, summary produced.
    Completed,
    /// Terminal: single workout finished. Distinct from `Completed` --
    /// no summary, no cart clear.
    SingleCompleted,
    /// Terminal: user backed out, progress discarded.
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEngine {
    session_id: String,
    items: Vec<WorkoutDescriptor>,
    mode: SessionMode,
    state: SessionState,
    current: usize,
    /// Measured active seconds accumulated across completed exercises.
    active_secs: u64,
}

impl SessionEngine {
    /// Create an active session over `items`. Rejects an empty list, and
    /// rejects `Single` mode with more than one item.
    pub fn new(items: Vec<WorkoutDescriptor>, mode: SessionMode) -> Result<Self> {
        if items.is_empty() {
            return Err(ValidationError::EmptyCollection("session items".into()).into());
        }
        if mode == SessionMode::Single && items.len() != 1 {
            return Err(ValidationError::InvalidValue {
                field: "mode".into(),
                message: format!("single mode requires exactly 1 item, got {}", items.len()),
            }
            .into());
        }
        Ok(Self {
            session_id: Uuid::new_v4().to_string(),
            items,
            mode,
            state: SessionState::Active,
            current: 0,
            active_secs: 0,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn workout_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.state != SessionState::Active
    }

    /// The workout currently being presented; None once terminal.
    pub fn current_workout(&self) -> Option<&WorkoutDescriptor> {
        if self.is_terminal() {
            return None;
        }
        self.items.get(self.current)
    }

    pub fn started_event(&self) -> Event {
        Event::SessionStarted {
            session_id: self.session_id.clone(),
            mode: self.mode,
            workout_count: self.items.len(),
            first_workout: self.items[0].name.clone(),
            at: Utc::now(),
        }
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// The workout at the current index is done; `elapsed_secs` is the
    /// timer value measured for it.
    ///
    /// Advances by exactly one, or takes the terminal transition on the
    /// last item. Reaching multi-workout completion clears `cart` as a
    /// side effect. Called on a terminal state this is a rejected no-op.
    pub fn complete_exercise(&mut self, cart: &mut CartStore, elapsed_secs: u64) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        self.active_secs += elapsed_secs;

        if self.mode == SessionMode::Single {
            self.state = SessionState::SingleCompleted;
            let workout = &self.items[0];
            return Some(Event::WorkoutCompleted {
                name: workout.name.clone(),
                equipment: workout.equipment.clone(),
                difficulty: workout.difficulty,
                duration_label: workout.duration_label.clone(),
                elapsed_secs,
                at: Utc::now(),
            });
        }

        if self.current + 1 < self.items.len() {
            self.current += 1;
            return Some(Event::ExerciseAdvanced {
                session_id: self.session_id.clone(),
                index: self.current,
                workout: self.items[self.current].name.clone(),
                elapsed_secs,
                at: Utc::now(),
            });
        }

        self.state = SessionState::Completed;
        cart.clear();
        Some(Event::SessionCompleted {
            summary: self.summary(),
            at: Utc::now(),
        })
    }

    /// Discards all progress. No summary, cart untouched.
    pub fn cancel(&mut self) -> Option<Event> {
        if self.state != SessionState::Active {
            return None;
        }
        self.state = SessionState::Cancelled;
        Some(Event::SessionCancelled {
            session_id: self.session_id.clone(),
            index: self.current,
            at: Utc::now(),
        })
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.session_id.clone(),
            completed_count: self.items.len(),
            duration_label_sum_min: self
                .items
                .iter()
                .map(|w| leading_minutes(&w.duration_label))
                .sum(),
            active_secs: self.active_secs,
            items: self.items.clone(),
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn three_workouts() -> Vec<WorkoutDescriptor> {
        let catalog = StaticCatalog::builtin();
        vec![
            catalog.find_by_id("squats-dumbbells-beginner").cloned().unwrap(),
            catalog
                .find_by_id("shoulder-press-dumbbells-beginner")
                .cloned()
                .unwrap(),
            catalog
                .find_by_id("plank-circuit-bodyweight-beginner")
                .cloned()
                .unwrap(),
        ]
    }

    #[test]
    fn requires_at_least_one_item() {
        assert!(SessionEngine::new(Vec::new(), SessionMode::Session).is_err());
    }

    #[test]
    fn single_mode_rejects_multiple_items() {
        assert!(SessionEngine::new(three_workouts(), SessionMode::Single).is_err());
    }

    #[test]
    fn index_increases_by_one_until_completed() {
        let mut cart = CartStore::new();
        let mut session = SessionEngine::new(three_workouts(), SessionMode::Session).unwrap();
        assert_eq!(session.current_index(), 0);

        assert!(matches!(
            session.complete_exercise(&mut cart, 60),
            Some(Event::ExerciseAdvanced { index: 1, .. })
        ));
        assert!(matches!(
            session.complete_exercise(&mut cart, 60),
            Some(Event::ExerciseAdvanced { index: 2, .. })
        ));
        assert!(matches!(
            session.complete_exercise(&mut cart, 60),
            Some(Event::SessionCompleted { .. })
        ));
        assert_eq!(session.state(), SessionState::Completed);
    }

    #[test]
    fn completion_after_terminal_is_rejected() {
        let mut cart = CartStore::new();
        let mut session = SessionEngine::new(three_workouts(), SessionMode::Session).unwrap();
        for _ in 0..3 {
            session.complete_exercise(&mut cart, 10);
        }
        assert!(session.complete_exercise(&mut cart, 10).is_none());
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn session_completion_clears_cart() {
        let mut cart = CartStore::new();
        for workout in &three_workouts() {
            cart.add(workout);
        }
        let mut session = SessionEngine::new(three_workouts(), SessionMode::Session).unwrap();
        for _ in 0..3 {
            session.complete_exercise(&mut cart, 90);
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn single_completion_leaves_cart_untouched() {
        let workouts = three_workouts();
        let mut cart = CartStore::new();
        cart.add(&workouts[1]);

        let mut session =
            SessionEngine::new(vec![workouts[0].clone()], SessionMode::Single).unwrap();
        let event = session.complete_exercise(&mut cart, 480);
        assert!(matches!(
            event,
            Some(Event::WorkoutCompleted { elapsed_secs: 480, .. })
        ));
        assert_eq!(session.state(), SessionState::SingleCompleted);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn cancel_discards_progress_and_leaves_cart() {
        let mut cart = CartStore::new();
        cart.add(&three_workouts()[0]);
        let mut session = SessionEngine::new(three_workouts(), SessionMode::Session).unwrap();
        session.complete_exercise(&mut cart, 30);

        assert!(matches!(
            session.cancel(),
            Some(Event::SessionCancelled { index: 1, .. })
        ));
        assert_eq!(session.state(), SessionState::Cancelled);
        assert_eq!(cart.len(), 1);
        assert!(session.cancel().is_none());
        assert!(session.complete_exercise(&mut cart, 30).is_none());
    }

    #[test]
    fn summary_sums_leading_label_minutes() {
        // Labels: "12-14 min", "10 min", "8 min" -> 30.
        let mut cart = CartStore::new();
        let mut session = SessionEngine::new(three_workouts(), SessionMode::Session).unwrap();
        let mut last = None;
        for _ in 0..3 {
            last = session.complete_exercise(&mut cart, 120);
        }
        match last {
            Some(Event::SessionCompleted { summary, .. }) => {
                assert_eq!(summary.completed_count, 3);
                assert_eq!(summary.duration_label_sum_min, 30);
                assert_eq!(summary.active_secs, 360);
                assert_eq!(summary.items.len(), 3);
            }
            other => panic!("expected SessionCompleted, got {other:?}"),
        }
    }

    #[test]
    fn current_workout_is_none_once_terminal() {
        let workouts = vec![three_workouts()[0].clone()];
        let mut cart = CartStore::new();
        let mut session = SessionEngine::new(workouts, SessionMode::Single).unwrap();
        assert!(session.current_workout().is_some());
        session.complete_exercise(&mut cart, 5);
        assert!(session.current_workout().is_none());
    }

    #[test]
    fn state_survives_serde_round_trip() {
        let mut cart = CartStore::new();
        let mut session = SessionEngine::new(three_workouts(), SessionMode::Session).unwrap();
        session.complete_exercise(&mut cart, 45);

        let json = serde_json::to_string(&session).unwrap();
        let restored: SessionEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.current_index(), 1);
        assert_eq!(restored.state(), SessionState::Active);
        assert_eq!(restored.session_id(), session.session_id());
    }
}
