use clap::Subcommand;
use repflow_core::{pick_for_date, pick_today, CatalogProvider, Config};

use crate::state::load_catalog;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Print the challenge for today's date
    Today {
        /// Override the date (YYYY-MM-DD), for previewing the rotation
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let catalog = load_catalog(&config)?;
    let candidates = catalog.daily_challenges();

    match action {
        ChallengeAction::Today { date } => {
            let pick = match date {
                Some(raw) => {
                    let date = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d")?;
                    pick_for_date(candidates, date)
                }
                None => pick_today(candidates),
            };
            match pick {
                Some(challenge) => println!("{}", serde_json::to_string_pretty(challenge)?),
                None => println!("{{}}"),
            }
        }
    }
    Ok(())
}
