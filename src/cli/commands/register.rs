use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::Directory;
use crate::core::oplog;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::store::KvStore;
use crate::ui::messages::success;

/// Register a new employee (manager only).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register { name, secret } = cmd {
        let store = KvStore::new(&cfg.data_dir);
        let directory = Directory::new(&store);
        directory.ensure_seeded()?;

        let notifier = Notifier::from_config(cfg);
        Session::open_manager(&store, &notifier, secret)?;

        let employee = directory.register_employee(name)?;

        success(format!(
            "Employee \"{}\" registered with id {}.",
            employee.name, employee.id
        ));

        // Operations log (non-blocking)
        if let Err(e) = oplog::record(
            &store,
            "register",
            &employee.name,
            &format!("Employee \"{}\" registered", employee.name),
        ) {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }
    }
    Ok(())
}
