use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::Directory;
use crate::core::oplog;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::notify::Notifier;
use crate::store::KvStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        secret,
    } = cmd
    {
        let store = KvStore::new(&cfg.data_dir);
        Directory::new(&store).ensure_seeded()?;

        let notifier = Notifier::from_config(cfg);
        Session::open_manager(&store, &notifier, secret)?;

        ExportLogic::export(&store, format, file, *force)?;

        // Operations log (non-blocking)
        if let Err(e) = oplog::record(
            &store,
            "export",
            file,
            &format!("Attendance log exported as {}", format.as_str()),
        ) {
            eprintln!("⚠️ Failed to write operations log: {}", e);
        }
    }
    Ok(())
}
