//! Workout timer.
//!
//! A wall-clock-based 3-state machine. Elapsed time is always recomputed
//! from real timestamps (`now - running_since`), never from a tick
//! counter, so process suspension introduces no drift: the first
//! `elapsed()` after resume is already correct.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!   ^________|__________|   (reset)
//! ```
//!
//! The `*_at` methods take an explicit epoch-ms timestamp so tests can
//! drive a fake clock; the wrappers without a suffix read the system
//! clock.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

/// Timestamp-based elapsed-time tracker, one per workout-guidance view.
///
/// Invalid commands (start while running, pause while idle) are defined
/// no-ops returning `None` -- repeated identical calls must be safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTimer {
    state: TimerState,
    /// Seconds banked from all prior running intervals.
    accumulated_secs: u64,
    /// Epoch ms when the timer was last (re)started; None unless Running.
    #[serde(default)]
    running_since_ms: Option<u64>,
}

impl Default for WorkoutTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            accumulated_secs: 0,
            running_since_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    /// Banked seconds, excluding the interval currently running.
    pub fn accumulated_secs(&self) -> u64 {
        self.accumulated_secs
    }

    /// Elapsed seconds at `now_ms`. Pure read, valid in any state.
    pub fn elapsed_at(&self, now_ms: u64) -> u64 {
        match self.running_since_ms {
            Some(since) => self.accumulated_secs + now_ms.saturating_sub(since) / 1000,
            None => self.accumulated_secs,
        }
    }

    /// Elapsed seconds at the system clock.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_at(now_ms())
    }

    // ── Commands (explicit clock) ────────────────────────────────────

    /// From Idle: zero and run. From Paused: resume, keeping the banked
    /// value. While Running: no-op. Returns whether state changed.
    pub fn start_at(&mut self, now_ms: u64) -> bool {
        match self.state {
            TimerState::Idle => {
                self.accumulated_secs = 0;
                self.running_since_ms = Some(now_ms);
                self.state = TimerState::Running;
                true
            }
            TimerState::Paused => {
                self.running_since_ms = Some(now_ms);
                self.state = TimerState::Running;
                true
            }
            TimerState::Running => false,
        }
    }

    /// Banks the running interval. No-op outside Running.
    pub fn pause_at(&mut self, now_ms: u64) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        if let Some(since) = self.running_since_ms.take() {
            self.accumulated_secs += now_ms.saturating_sub(since) / 1000;
        }
        self.state = TimerState::Paused;
        true
    }

    /// Valid from any state.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.accumulated_secs = 0;
        self.running_since_ms = None;
    }

    // ── Commands (system clock) ──────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if !self.start_at(now_ms()) {
            return None;
        }
        Some(Event::TimerStarted { at: Utc::now() })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.pause_at(now_ms()) {
            return None;
        }
        Some(Event::TimerPaused {
            elapsed_secs: self.accumulated_secs,
            at: Utc::now(),
        })
    }

    pub fn reset_with_event(&mut self) -> Event {
        self.reset();
        Event::TimerReset { at: Utc::now() }
    }
}

/// `MM:SS`, zero-padded. Sessions are bounded to tens of minutes, so no
/// hour rollover handling.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
