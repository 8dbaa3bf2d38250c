//! Calendar export commands.

use std::path::PathBuf;

use clap::Subcommand;
use taskline_core::export::export_ics;
use taskline_core::{storage, TaskStore};

#[derive(Subcommand)]
pub enum ExportAction {
    /// Export dated tasks as an ICS calendar file
    Ics {
        /// Output path (defaults to calendar.ics in the data directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open()?;
    let tasks = store.load()?;

    match action {
        ExportAction::Ics { output } => {
            let path = match output {
                Some(path) => path,
                None => storage::data_dir()?.join("calendar.ics"),
            };
            let count = export_ics(&tasks, &path)?;
            println!("Exported {count} event(s) to {}", path.display());
        }
    }
    Ok(())
}
