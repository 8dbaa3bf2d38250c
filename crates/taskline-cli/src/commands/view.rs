//! View tasks scheduled on a date.

use clap::Subcommand;
use taskline_core::TaskStore;

use super::parse_date;

const NO_TASK_SCHEDULED: &str = "There are no tasks scheduled on that date.";
const PRESENT_SCHEDULE: &str = "Here is your schedule for that day:";

#[derive(Subcommand)]
pub enum ViewAction {
    /// Show the tasks scheduled on a date (dd/MM/yyyy)
    On {
        /// Date to inspect
        date: String,
    },
}

pub fn run(action: ViewAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    let tasks = store.load()?;

    match action {
        ViewAction::On { date } => {
            let scheduled = tasks.tasks_on(parse_date(&date)?);
            if scheduled.is_empty() {
                println!("{NO_TASK_SCHEDULED}");
            } else {
                println!("{PRESENT_SCHEDULE}");
                for (i, task) in scheduled.iter().enumerate() {
                    println!("{}.{task}", i + 1);
                }
            }
        }
    }
    Ok(())
}
