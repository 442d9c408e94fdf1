//! CLI-side persistence of engine state between invocations.
//!
//! The cart, the optional active session and the current workout timer
//! are saved as one JSON snapshot in the data directory. Completed
//! session reports are appended to a separate history file -- that file
//! is the hand-off point to whatever post-session consumer cares, the
//! engine never reads it back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use repflow_core::storage::data_dir;
use repflow_core::{CartStore, Config, SessionEngine, StaticCatalog, WorkoutTimer};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub cart: CartStore,
    #[serde(default)]
    pub session: Option<SessionEngine>,
    #[serde(default)]
    pub timer: WorkoutTimer,
}

fn state_path() -> CliResult<PathBuf> {
    Ok(data_dir()?.join("state.json"))
}

pub fn load_state() -> AppState {
    let Ok(path) = state_path() else {
        return AppState::default();
    };
    if let Ok(raw) = std::fs::read_to_string(path) {
        if let Ok(state) = serde_json::from_str::<AppState>(&raw) {
            return state;
        }
    }
    AppState::default()
}

pub fn save_state(state: &AppState) -> CliResult<()> {
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(state_path()?, json)?;
    Ok(())
}

/// Catalog per config: a user-supplied JSON file, else the builtin sample.
pub fn load_catalog(config: &Config) -> CliResult<StaticCatalog> {
    match &config.catalog_path {
        Some(path) => Ok(StaticCatalog::from_json_path(path)?),
        None => Ok(StaticCatalog::builtin()),
    }
}

/// Append one completion report to the history file. Fire-and-forget
/// from the engine's point of view.
pub fn append_history(entry: serde_json::Value) -> CliResult<()> {
    let path = data_dir()?.join("history.json");
    let mut entries: Vec<serde_json::Value> = match std::fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        Err(_) => Vec::new(),
    };
    entries.push(entry);
    std::fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}
