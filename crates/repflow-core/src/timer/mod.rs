mod engine;

pub use engine::{format_mmss, TimerState, WorkoutTimer};
