mod engine;
mod summary;

pub use engine::{SessionEngine, SessionMode, SessionState};
pub use summary::{leading_minutes, SessionSummary};
