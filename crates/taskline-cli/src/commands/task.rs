//! Task management commands.

use chrono::Local;
use clap::Subcommand;
use taskline_core::task::recurrence::parse_weekday;
use taskline_core::{Priority, Task, TaskStore};

use super::{parse_datetime, parse_time};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a plain to-do
    AddTodo {
        /// Task description
        description: String,
        /// Priority: high, medium or low
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Add a task with a due date-time (dd/MM/yyyy HHmm)
    AddDeadline {
        /// Task description
        description: String,
        /// Due date-time
        by: String,
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Add a fixed event occupying a start-end interval
    AddEvent {
        /// Event description
        description: String,
        /// Start date-time (dd/MM/yyyy HHmm)
        from: String,
        /// End date-time (dd/MM/yyyy HHmm)
        to: String,
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Add a flexible task to be done within a period
    AddPeriod {
        /// Task description
        description: String,
        /// Window start (dd/MM/yyyy HHmm)
        from: String,
        /// Window end (dd/MM/yyyy HHmm)
        to: String,
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Add a recurring event anchored on a weekday
    AddRecurring {
        /// Event description
        description: String,
        /// Weekday anchor (e.g. "friday" or "fri")
        weekday: String,
        /// Start time on that day (HHmm)
        from: String,
        /// End time on that day (HHmm)
        to: String,
        /// Optional module code label
        #[arg(long)]
        mod_code: Option<String>,
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// List tasks
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Mark a task as done
    Done {
        /// One-based task number as shown by `task list`
        number: usize,
    },
    /// Attach a comment to a task
    Comment {
        /// One-based task number
        number: usize,
        /// Comment text
        comment: String,
    },
    /// Change a task's priority
    Priority {
        /// One-based task number
        number: usize,
        /// New priority: high, medium or low
        priority: String,
    },
    /// Delete a task
    Delete {
        /// One-based task number
        number: usize,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    let mut tasks = store.load()?;

    match action {
        TaskAction::AddTodo {
            description,
            priority,
        } => {
            let task = Task::todo(description).with_priority(priority.parse::<Priority>()?);
            println!("Added: {task}");
            tasks.add(task);
            store.save(&tasks)?;
        }
        TaskAction::AddDeadline {
            description,
            by,
            priority,
        } => {
            let task = Task::deadline(description, parse_datetime(&by)?)
                .with_priority(priority.parse::<Priority>()?);
            println!("Added: {task}");
            tasks.add(task);
            store.save(&tasks)?;
        }
        TaskAction::AddEvent {
            description,
            from,
            to,
            priority,
        } => {
            let task = Task::event(description, parse_datetime(&from)?, parse_datetime(&to)?)?
                .with_priority(priority.parse::<Priority>()?);
            println!("Added: {task}");
            tasks.add(task);
            store.save(&tasks)?;
        }
        TaskAction::AddPeriod {
            description,
            from,
            to,
            priority,
        } => {
            let task =
                Task::todo_within_period(description, parse_datetime(&from)?, parse_datetime(&to)?)?
                    .with_priority(priority.parse::<Priority>()?);
            println!("Added: {task}");
            tasks.add(task);
            store.save(&tasks)?;
        }
        TaskAction::AddRecurring {
            description,
            weekday,
            from,
            to,
            mod_code,
            priority,
        } => {
            let today = Local::now().date_naive();
            let task = Task::recurring_event(
                description,
                today,
                parse_weekday(&weekday)?,
                parse_time(&from)?,
                parse_time(&to)?,
                mod_code,
            )?
            .with_priority(priority.parse::<Priority>()?);
            println!("Added: {task}");
            tasks.add(task);
            store.save(&tasks)?;
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks yet.");
            } else {
                for (i, task) in tasks.iter().enumerate() {
                    println!("{}.{task}", i + 1);
                }
            }
        }
        TaskAction::Done { number } => {
            let task = tasks.mark_done(to_index(number)?)?;
            println!("Done: {task}");
            store.save(&tasks)?;
        }
        TaskAction::Comment { number, comment } => {
            let task = tasks.set_comment(to_index(number)?, comment)?;
            println!("Updated: {task}");
            store.save(&tasks)?;
        }
        TaskAction::Priority { number, priority } => {
            let task = tasks.set_priority(to_index(number)?, priority.parse::<Priority>()?)?;
            println!("Updated: {task}");
            store.save(&tasks)?;
        }
        TaskAction::Delete { number } => {
            let task = tasks.remove(to_index(number)?)?;
            println!("Deleted: {task}");
            store.save(&tasks)?;
        }
    }
    Ok(())
}

/// Task numbers are one-based on the command line.
fn to_index(number: usize) -> Result<usize, Box<dyn std::error::Error>> {
    number
        .checked_sub(1)
        .ok_or_else(|| "task numbers start at 1".into())
}
