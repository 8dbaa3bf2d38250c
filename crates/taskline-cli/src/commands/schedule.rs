//! Free-slot scheduling commands.

use clap::Subcommand;
use taskline_core::render::render_outcome_with;
use taskline_core::scheduler::{schedule_by_deadline, schedule_within_horizon};
use taskline_core::{Config, TaskStore};

use super::parse_datetime;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Find free slots for a duration, optionally by a deadline
    Find {
        /// Requested duration in whole hours
        duration_hours: i64,
        /// Deadline (dd/MM/yyyy HHmm); omitted means the next 30 days
        #[arg(long)]
        by: Option<String>,
        /// Emit the structured outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    let tasks = store.load()?;
    let config = Config::load()?;

    match action {
        ScheduleAction::Find {
            duration_hours,
            by,
            json,
        } => {
            // The engine assumes validated input; reject here.
            if duration_hours <= 0 {
                return Err("duration must be a positive number of hours".into());
            }
            let outcome = match by {
                Some(deadline) => {
                    schedule_by_deadline(&tasks, duration_hours, parse_datetime(&deadline)?)
                }
                None => schedule_within_horizon(&tasks, duration_hours),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", render_outcome_with(&outcome, &config.date_format));
            }
        }
    }
    Ok(())
}
