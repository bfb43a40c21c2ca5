use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::Directory;
use crate::core::oplog;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::store::{ATTENDANCE_LOG_KEY, EMPLOYEES_KEY, KvStore, MANAGER_SECRET_KEY};
use crate::ui::messages::success;
use std::io::{Write, stdin, stdout};

/// Delete the roster, the manager secret and the attendance log.
/// The operations log survives so the reset itself stays traceable.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { secret, yes } = cmd {
        let store = KvStore::new(&cfg.data_dir);
        Directory::new(&store).ensure_seeded()?;

        let notifier = Notifier::from_config(cfg);
        Session::open_manager(&store, &notifier, secret)?;

        if !*yes {
            print!("This deletes all employees and attendance data. Continue? [y/N]: ");
            stdout().flush().ok();

            let mut answer = String::new();
            stdin().read_line(&mut answer)?;
            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("❌ Reset cancelled by user.");
                return Ok(());
            }
        }

        store.remove(ATTENDANCE_LOG_KEY)?;
        store.remove(EMPLOYEES_KEY)?;
        store.remove(MANAGER_SECRET_KEY)?;

        success("All application data cleared from the store.");

        // Operations log (non-blocking)
        if let Err(e) = oplog::record(&store, "reset", "store", "All application data cleared") {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }
    }
    Ok(())
}
