use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::oplog::OplogLogic;
use crate::errors::AppResult;
use crate::store::KvStore;

/// Print the internal operations log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let store = KvStore::new(&cfg.data_dir);
        OplogLogic::print_log(&store)?;
    }
    Ok(())
}
