use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attlog
/// CLI application to track employee attendance with a local JSON store
#[derive(Parser)]
#[command(
    name = "attlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: clock employees in and out, aggregate worked hours",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or custom locations)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and seed the default data set
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Show the clock status for an employee
    Status {
        /// Registered employee name (exact match)
        name: String,
    },

    /// Toggle clock-in/clock-out for an employee
    Clock {
        /// Registered employee name (exact match)
        name: String,
    },

    /// List the registered employee roster
    Employees,

    /// Register a new employee (manager only)
    Register {
        /// Name of the employee to register
        name: String,

        #[arg(long, help = "Manager secret")]
        secret: String,
    },

    /// Print the attendance log (manager only)
    Report {
        #[arg(long, help = "Only entries for this employee (exact match)")]
        employee: Option<String>,

        #[arg(long, help = "Manager secret")]
        secret: String,
    },

    /// Show per-employee worked-hours totals (manager only)
    Hours {
        #[arg(long, help = "Manager secret")]
        secret: String,
    },

    /// Export the attendance log (manager only)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[arg(long, help = "Manager secret")]
        secret: String,
    },

    /// Create a backup snapshot of the data store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Delete all stored data (manager only)
    Reset {
        #[arg(long, help = "Manager secret")]
        secret: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Print or manage the internal operations log
    Log {
        #[arg(long = "print", help = "Print the operations log")]
        print: bool,
    },
}
