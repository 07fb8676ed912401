use clap::{Parser, Subcommand};

/// Command-line interface definition for visitor-kiosk
#[derive(Parser)]
#[command(
    name = "visitor-kiosk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Kiosk visitor register: collect visitor entries in SQLite and export them as CSV",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register one visitor. Every field is optional.
    Add {
        #[arg(long = "first-name", default_value = "")]
        first_name: String,

        #[arg(long = "last-name", default_value = "")]
        last_name: String,

        #[arg(long = "location", default_value = "")]
        location: String,

        #[arg(long = "email", default_value = "")]
        email: String,

        /// Visit duration, hours part
        #[arg(long = "hours", default_value = "")]
        hours: String,

        /// Visit duration, minutes part
        #[arg(long = "minutes", default_value = "")]
        minutes: String,

        #[arg(long = "notes", default_value = "")]
        notes: String,

        /// Store this timestamp instead of the current time ("DD.MM.YYYY, HH:MM:SS")
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// List all registered visitors
    List {
        /// Print the list as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Write all visitors to the CSV export file and share it
    Export {
        /// Directory for the export file (overrides the configuration)
        #[arg(long = "dir")]
        dir: Option<String>,

        /// Only write the file, do not hand it to the share program
        #[arg(long = "no-share")]
        no_share: bool,
    },

    /// Delete ALL visitors (irreversible)
    Reset {
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Run the full-screen kiosk form
    Kiosk,
}
