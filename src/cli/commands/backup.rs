use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::KvStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = KvStore::new(&cfg.data_dir);
        BackupLogic::backup(&store, file, *compress)?;
    }
    Ok(())
}
