//! Configuration commands.

use clap::Subcommand;
use taskline_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set the date-time rendering format (strftime layout)
    SetDateFormat {
        /// New layout, e.g. "%d/%m/%Y %H%M"
        format: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("date_format = {}", config.date_format);
        }
        ConfigAction::SetDateFormat { format } => {
            let mut config = Config::load()?;
            config.date_format = format;
            config.save()?;
            println!("date_format = {}", config.date_format);
        }
    }
    Ok(())
}
