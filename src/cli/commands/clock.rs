use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::Directory;
use crate::core::oplog;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::store::KvStore;
use crate::ui::messages::{info, success};
use crate::utils::time::format_timestamp;

/// Toggle clock-in/clock-out for one employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock { name } = cmd {
        let store = KvStore::new(&cfg.data_dir);
        Directory::new(&store).ensure_seeded()?;

        let notifier = Notifier::from_config(cfg);
        let mut session = Session::open_employee(&store, &notifier, name)?;

        let outcome = session.toggle()?;

        success(format!(
            "{} {} at {}.",
            session.employee_name(),
            outcome.action.verb(),
            format_timestamp(&outcome.time)
        ));
        info(format!("Manager notification: {}", outcome.notification));

        // Operations log (non-blocking)
        if let Err(e) = oplog::record(
            &store,
            "clock",
            name,
            &format!("{} {}", name, outcome.action.verb()),
        ) {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }
    }
    Ok(())
}
