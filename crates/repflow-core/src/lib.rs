//! # Repflow Core Library
//!
//! Core business logic for the Repflow workout guide. All operations are
//! available via a standalone CLI binary; any GUI surface is a thin layer
//! over the same library.
//!
//! ## Architecture
//!
//! - **Catalog**: read-only workout content behind the [`CatalogProvider`]
//!   trait, so engines are testable with small synthetic catalogs
//! - **Cart**: insertion-ordered selection store deduplicated on the
//!   canonical (name, equipment, difficulty) identity
//! - **Timer**: wall-clock 3-state machine; elapsed time is recomputed
//!   from timestamps, so host suspension never causes drift
//! - **Session**: finite-state machine advancing through an ordered
//!   workout list, with distinct single-workout and multi-workout
//!   terminal transitions
//! - **Daily rotation**: deterministic day-of-year-modulo challenge pick
//!
//! ## Key Components
//!
//! - [`SessionEngine`]: session state machine
//! - [`WorkoutTimer`]: per-workout elapsed-time tracker
//! - [`CartStore`]: deduplicated selection cart
//! - [`Config`]: application configuration management

pub mod cart;
pub mod catalog;
pub mod daily;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod timer;

pub use cart::{AddOutcome, CartItem, CartStore};
pub use catalog::{
    canonical_id, CatalogProvider, Difficulty, EquipmentGroup, StaticCatalog, Tip,
    WorkoutDescriptor,
};
pub use daily::{pick_for_date, pick_today};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use session::{SessionEngine, SessionMode, SessionState, SessionSummary};
pub use storage::Config;
pub use timer::{format_mmss, TimerState, WorkoutTimer};
