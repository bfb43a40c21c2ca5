use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::Directory;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::store::KvStore;
use crate::utils::time::format_timestamp;

/// Show the derived clock status for one employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { name } = cmd {
        let store = KvStore::new(&cfg.data_dir);
        Directory::new(&store).ensure_seeded()?;

        let notifier = Notifier::from_config(cfg);
        let session = Session::open_employee(&store, &notifier, name)?;

        if session.state.clocked_in {
            println!("{} is clocked IN.", session.employee_name());
        } else {
            println!("{} is clocked OUT.", session.employee_name());
        }

        if let (Some(time), Some(action)) =
            (session.state.last_action_time, session.state.last_action)
        {
            println!("Last action: {} at {}.", action.la_as_str(), format_timestamp(&time));
        } else {
            println!("No attendance recorded yet.");
        }
    }
    Ok(())
}
