use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLog;
use crate::core::calculator::hours::calculate_hours;
use crate::core::directory::Directory;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::notify::Notifier;
use crate::store::KvStore;
use crate::utils::table::Table;
use crate::utils::time::format_hours;

/// Show per-employee worked-hours totals, highest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { secret } = cmd {
        let store = KvStore::new(&cfg.data_dir);
        Directory::new(&store).ensure_seeded()?;

        let notifier = Notifier::from_config(cfg);
        Session::open_manager(&store, &notifier, secret)?;

        let entries = AttendanceLog::new(&store).list_all();
        let totals = calculate_hours(&entries);

        if totals.is_empty() {
            println!("Not enough data to calculate worked hours.");
            return Ok(());
        }

        let mut table = Table::new(&["employee", "total hours"]);
        for record in totals {
            table.add_row(vec![record.employee_name, format_hours(record.total_hours)]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
