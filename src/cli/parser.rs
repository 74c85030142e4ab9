use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rFleetlog
/// CLI application to keep fleet records with SQLite
#[derive(Parser)]
#[command(
    name = "rfleetlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fleet records CLI: driver document compliance, trucks, companies and workday timelines",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(global = true, short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List drivers with their document status
    Drivers {
        #[arg(long = "all", help = "Include inactive drivers")]
        all: bool,

        #[arg(
            long = "status",
            help = "Only drivers with this status: incomplete, expired, urgent, upcoming, ok"
        )]
        status: Option<String>,
    },

    /// Show every attribute of one driver and its status
    Driver {
        /// Driver id
        id: i64,
    },

    /// List trucks
    Trucks,

    /// List companies
    Companies,

    /// List back-office users
    Users,

    /// Show workday timelines of a driver
    Workday {
        #[arg(long = "driver", help = "Driver reference as stored in the workday rows")]
        driver: String,

        #[arg(long = "date", help = "Only this day (dd/mm/yyyy)")]
        date: Option<String>,
    },

    /// Import positional records from a JSON array of arrays
    Import {
        #[arg(
            long = "kind",
            help = "Entity kind: user, driver, truck, company, track_point, workday"
        )]
        kind: String,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the driver status report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "all", help = "Include inactive drivers")]
        all: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
