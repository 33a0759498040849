use clap::{Parser, Subcommand};

/// Command-line interface definition for timecard
#[derive(Parser)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time clock: punch in, punch out and review this week's hours",
    long_about = None
)]
pub struct Cli {
    /// Use this database file instead of the configured one
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Test mode: `init` leaves the config file alone
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Clock in to work
    In {
        /// Optional note stored with the punch
        description: Option<String>,
    },

    /// Clock out of work
    Out {
        /// Optional note stored with the punch
        description: Option<String>,
    },

    /// Show whether you are currently clocked in
    Status,

    /// Present the timesheet of the last 7 days
    Sheet {
        #[arg(long = "events", help = "Also list the raw punches of the week")]
        events: bool,
    },

    /// Inspect or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Open the configuration file in $EDITOR (fallback: nano, notepad on Windows)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Editor to use instead of $EDITOR"
        )]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "migrate", help = "Apply pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Run SQLite's integrity check")]
        check: bool,

        #[arg(long = "vacuum", help = "Compact the database file (VACUUM)")]
        vacuum: bool,

        #[arg(long = "info", help = "Show punch counts and time range")]
        info: bool,
    },

    /// Internal operations log (init, punches, migrations)
    Log {
        #[arg(long = "print", help = "Print the recorded operations")]
        print: bool,
    },
}
