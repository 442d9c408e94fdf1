use clap::Subcommand;
use repflow_core::format_mmss;

use crate::state::{load_state, save_state};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start, or resume from pause
    Start,
    /// Pause, banking the running interval
    Pause,
    /// Back to idle, elapsed time discarded
    Reset,
    /// Print current timer state as JSON
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = load_state();

    match action {
        TimerAction::Start => match state.timer.start() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::json!({ "status": "already_running" })),
        },
        TimerAction::Pause => match state.timer.pause() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{}", serde_json::json!({ "status": "not_running" })),
        },
        TimerAction::Reset => {
            let event = state.timer.reset_with_event();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Status => {
            let elapsed = state.timer.elapsed_secs();
            let status = serde_json::json!({
                "state": state.timer.state(),
                "elapsed_secs": elapsed,
                "display": format_mmss(elapsed),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    save_state(&state)?;
    Ok(())
}
