use chrono::Utc;
use clap::Subcommand;
use repflow_core::{canonical_id, AddOutcome, CatalogProvider, Config, Difficulty, Event};

use crate::state::{load_catalog, load_state, save_state};

#[derive(Subcommand)]
pub enum CartAction {
    /// Add a catalog workout to the cart (idempotent)
    Add {
        /// Workout name as listed in the catalog
        name: String,
        /// Equipment group
        equipment: String,
        /// Difficulty (defaults to the configured one)
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Remove an entry by canonical id
    Remove { id: String },
    /// Print cart entries in insertion order
    List,
    /// Empty the cart unconditionally
    Clear,
}

pub fn run(action: CartAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut state = load_state();

    match action {
        CartAction::Add {
            name,
            equipment,
            difficulty,
        } => {
            let difficulty: Difficulty = match difficulty {
                Some(d) => d.parse()?,
                None => config.default_difficulty,
            };
            let catalog = load_catalog(&config)?;
            let id = canonical_id(&name, &equipment, difficulty);
            let workout = catalog
                .find_by_id(&id)
                .ok_or_else(|| format!("no catalog workout with id '{id}'"))?;
            match state.cart.add(workout) {
                AddOutcome::Added => {
                    let event = Event::CartItemAdded {
                        id,
                        name: workout.name.clone(),
                        at: Utc::now(),
                    };
                    println!("{}", serde_json::to_string_pretty(&event)?);
                }
                AddOutcome::AlreadyPresent => {
                    println!("{}", serde_json::json!({ "status": "already_present", "id": id }));
                }
            }
        }
        CartAction::Remove { id } => {
            if state.cart.remove(&id) {
                let event = Event::CartItemRemoved { id, at: Utc::now() };
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::json!({ "status": "not_in_cart", "id": id }));
            }
        }
        CartAction::List => {
            println!("{}", serde_json::to_string_pretty(state.cart.items())?);
        }
        CartAction::Clear => {
            state.cart.clear();
            let event = Event::CartCleared { at: Utc::now() };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    save_state(&state)?;
    Ok(())
}
