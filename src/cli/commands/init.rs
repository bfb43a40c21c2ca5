use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::directory::Directory;
use crate::core::oplog;
use crate::errors::AppResult;
use crate::store::KvStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the data store, seeded with the default roster and manager secret
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data_dir {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom) = &cli.data_dir {
        cfg.data_dir = custom.clone();
    }

    println!("⚙️  Initializing attlog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Data dir   : {}", &cfg.data_dir);

    //
    // Seed default employees and manager secret
    //
    let store = KvStore::new(&cfg.data_dir);
    Directory::new(&store).ensure_seeded()?;

    println!("✅ Store seeded at {}", &cfg.data_dir);

    //
    // Operations log (non-blocking)
    //
    if let Err(e) = oplog::record(
        &store,
        "init",
        "store",
        &format!("Store initialized at {}", &cfg.data_dir),
    ) {
        eprintln!("⚠️ Failed to write operations log: {}", e);
    }

    println!("🎉 attlog initialization completed!");
    Ok(())
}
