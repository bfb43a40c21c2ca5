use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::Directory;
use crate::errors::AppResult;
use crate::store::KvStore;
use crate::utils::table::Table;

/// List the registered roster in insertion order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employees = cmd {
        let store = KvStore::new(&cfg.data_dir);
        let directory = Directory::new(&store);
        directory.ensure_seeded()?;

        let employees = directory.list_employees();
        if employees.is_empty() {
            println!("No employees registered.");
            return Ok(());
        }

        let mut table = Table::new(&["id", "name"]);
        for e in employees {
            table.add_row(vec![e.id, e.name]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
