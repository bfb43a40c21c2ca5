use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLog;
use crate::core::directory::Directory;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::store::KvStore;
use crate::utils::table::Table;

/// Print the attendance log, optionally filtered to one employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { employee, secret } = cmd {
        let store = KvStore::new(&cfg.data_dir);
        Directory::new(&store).ensure_seeded()?;

        let notifier = Notifier::from_config(cfg);
        Session::open_manager(&store, &notifier, secret)?;

        let attendance = AttendanceLog::new(&store);
        let mut entries = match employee {
            Some(name) => attendance.list_for_employee(name),
            None => attendance.list_all(),
        };
        entries.sort_by_key(|e| e.timestamp);

        if entries.is_empty() {
            println!("No attendance entries recorded yet.");
            return Ok(());
        }

        let mut table = Table::new(&["employee", "action", "date", "time"]);
        for entry in entries {
            table.add_row(vec![
                entry.employee_name.clone(),
                entry.action.la_as_str().to_string(),
                entry.date_str(),
                entry.time_str(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
