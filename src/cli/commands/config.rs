use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

/// Manage the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "No configuration file found at {} (run `attlog init` first).",
                    path.display()
                )));
            }

            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("📄 {}\n", path.display());
            println!("{content}");
        }
    }
    Ok(())
}
