use clap::Subcommand;
use repflow_core::{
    canonical_id, CatalogProvider, Config, Difficulty, Event, SessionEngine, SessionMode,
    WorkoutDescriptor,
};

use crate::state::{append_history, load_catalog, load_state, save_state};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a multi-workout session from the current cart
    Start,
    /// Start a single-workout session (no cart checkout on completion)
    Single {
        name: String,
        equipment: String,
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Mark the current exercise completed and advance
    Next,
    /// Cancel the session, discarding all progress
    Cancel,
    /// Print the session state as JSON
    Status,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut state = load_state();

    match action {
        SessionAction::Start => {
            if state.session.as_ref().is_some_and(|s| !s.is_terminal()) {
                return Err("a session is already active; cancel it first".into());
            }
            let catalog = load_catalog(&config)?;
            // Resolve cart snapshots back to full descriptors; a snapshot
            // whose catalog entry vanished still runs with its saved fields.
            let items: Vec<WorkoutDescriptor> = state
                .cart
                .items()
                .iter()
                .map(|item| {
                    catalog.find_by_id(&item.id).cloned().unwrap_or_else(|| {
                        WorkoutDescriptor {
                            name: item.name.clone(),
                            equipment: item.equipment.clone(),
                            difficulty: item.difficulty,
                            duration_label: item.duration_label.clone(),
                            instructions: String::new(),
                            tips: Vec::new(),
                        }
                    })
                })
                .collect();
            let session = SessionEngine::new(items, SessionMode::Session)?;
            println!("{}", serde_json::to_string_pretty(&session.started_event())?);
            state.timer.reset();
            state.timer.start();
            state.session = Some(session);
        }
        SessionAction::Single {
            name,
            equipment,
            difficulty,
        } => {
            if state.session.as_ref().is_some_and(|s| !s.is_terminal()) {
                return Err("a session is already active; cancel it first".into());
            }
            let difficulty: Difficulty = match difficulty {
                Some(d) => d.parse()?,
                None => config.default_difficulty,
            };
            let catalog = load_catalog(&config)?;
            let id = canonical_id(&name, &equipment, difficulty);
            let workout = catalog
                .find_by_id(&id)
                .ok_or_else(|| format!("no catalog workout with id '{id}'"))?
                .clone();
            let session = SessionEngine::new(vec![workout], SessionMode::Single)?;
            println!("{}", serde_json::to_string_pretty(&session.started_event())?);
            state.timer.reset();
            state.timer.start();
            state.session = Some(session);
        }
        SessionAction::Next => {
            let Some(session) = state.session.as_mut() else {
                return Err("no active session".into());
            };
            let elapsed = state.timer.elapsed_secs();
            match session.complete_exercise(&mut state.cart, elapsed) {
                None => {
                    println!("{}", serde_json::json!({ "status": "rejected", "reason": "session already finished" }));
                }
                Some(event) => {
                    println!("{}", serde_json::to_string_pretty(&event)?);
                    match &event {
                        Event::ExerciseAdvanced { .. } => {
                            // Fresh timer for the next workout.
                            state.timer.reset();
                            state.timer.start();
                        }
                        Event::SessionCompleted { .. } | Event::WorkoutCompleted { .. } => {
                            // Fire-and-forget hand-off: a history write
                            // failure must not leave the session active.
                            if config.history_enabled {
                                if let Err(e) = append_history(serde_json::to_value(&event)?) {
                                    eprintln!("warning: could not append history: {e}");
                                }
                            }
                            state.timer.reset();
                            state.session = None;
                        }
                        _ => {}
                    }
                }
            }
        }
        SessionAction::Cancel => {
            let Some(session) = state.session.as_mut() else {
                return Err("no active session".into());
            };
            match session.cancel() {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => {
                    println!("{}", serde_json::json!({ "status": "rejected", "reason": "session already finished" }));
                }
            }
            state.timer.reset();
            state.session = None;
        }
        SessionAction::Status => match &state.session {
            Some(session) => {
                let status = serde_json::json!({
                    "session_id": session.session_id(),
                    "state": session.state(),
                    "mode": session.mode(),
                    "current_index": session.current_index(),
                    "workout_count": session.workout_count(),
                    "current_workout": session.current_workout().map(|w| &w.name),
                    "timer_elapsed_secs": state.timer.elapsed_secs(),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            None => println!("{}", serde_json::json!({ "status": "no_session" })),
        },
    }

    save_state(&state)?;
    Ok(())
}
