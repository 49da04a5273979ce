use crate::export::ExportFormat;
use clap::{ArgGroup, Args, Parser, Subcommand};

/// Command-line interface definition for vacboard
#[derive(Parser)]
#[command(
    name = "vacboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Task/vacation board helper: vacation timeline, board columns and sidebar forms",
    long_about = None
)]
pub struct Cli {
    /// Override the vacation data file (JSON array, `-` for stdin)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Display window selection shared by `gantt` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// First visible day (dd/mm/yyyy or yyyy-mm-dd), default today
    #[arg(long = "from")]
    pub from: Option<String>,

    /// Last visible day (dd/mm/yyyy or yyyy-mm-dd), default December 31
    #[arg(long = "to")]
    pub to: Option<String>,

    /// Year, month, day or `start:end` range (e.g. 2025, 2025-07, 2025-07:2025-09)
    #[arg(long = "range", conflicts_with_all = ["from", "to"])]
    pub range: Option<String>,

    /// Pretend today is this date (dd/mm/yyyy or yyyy-mm-dd)
    #[arg(long = "today")]
    pub today: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Draw the vacation timeline (Gantt chart)
    Gantt {
        #[command(flatten)]
        window: WindowArgs,

        #[arg(long = "json", help = "Print chart dataset descriptors as JSON")]
        json: bool,

        #[arg(long = "no-color", help = "Disable ANSI colors")]
        no_color: bool,
    },

    /// Show vacations in board columns (todo / in progress / waiting / done)
    Board {
        #[arg(long = "user", help = "Only this user's vacations (`all` for everybody)")]
        user: Option<String>,

        #[arg(long = "today")]
        today: Option<String>,

        #[arg(long = "json")]
        json: bool,
    },

    /// Resolve which form controls a board view shows
    View {
        #[arg(long = "view", help = "users, ad-hoc, reg, pro, vacation or backlog")]
        view: Option<String>,

        #[arg(long = "user")]
        user: Option<String>,

        #[arg(
            long = "options",
            value_delimiter = ',',
            help = "Entries of the user selector, comma separated"
        )]
        options: Vec<String>,
    },

    /// Fill a sidebar form from a list item's data attribute
    #[command(group(ArgGroup::new("payload").required(true).args(["task", "vacation"])))]
    Sidebar {
        #[arg(long = "task", value_name = "JSON", help = "data-task attribute")]
        task: Option<String>,

        #[arg(long = "vacation", value_name = "JSON", help = "data-vacation attribute")]
        vacation: Option<String>,

        #[arg(long = "column", default_value = "todo")]
        column: String,

        #[arg(long = "view")]
        view: Option<String>,

        #[arg(long = "today")]
        today: Option<String>,
    },

    /// Export the timeline bars of a window
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        window: WindowArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
