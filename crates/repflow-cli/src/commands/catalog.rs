use clap::Subcommand;
use repflow_core::{CatalogProvider, Config, Difficulty};

use crate::state::load_catalog;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List equipment groups, or the workouts of one group
    List {
        /// Restrict to one equipment group
        #[arg(long)]
        equipment: Option<String>,
        /// Difficulty filter (defaults to the configured one)
        #[arg(long)]
        difficulty: Option<String>,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let catalog = load_catalog(&config)?;

    match action {
        CatalogAction::List {
            equipment: None, ..
        } => {
            let groups: Vec<_> = catalog
                .equipment_groups()
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "equipment": g.equipment,
                        "icon": g.icon,
                        "beginner": g.beginner.len(),
                        "intermediate": g.intermediate.len(),
                        "advanced": g.advanced.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        CatalogAction::List {
            equipment: Some(equipment),
            difficulty,
        } => {
            let difficulty: Difficulty = match difficulty {
                Some(d) => d.parse()?,
                None => config.default_difficulty,
            };
            let workouts = catalog.workouts_for(&equipment, difficulty);
            println!("{}", serde_json::to_string_pretty(workouts)?);
        }
    }
    Ok(())
}
