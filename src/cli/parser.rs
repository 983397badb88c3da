use crate::export::ExportFormat;
use crate::render::RenderFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTripPlan
/// CLI client for the trip-planning service: plan trips and render ELD duty logs
#[derive(Parser)]
#[command(
    name = "rtripplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan a trip against the HOS planning service and render ELD duty-status logs",
    long_about = None
)]
pub struct Cli {
    /// Override the planning service base URL
    #[arg(global = true, long = "api-base")]
    pub api_base: Option<String>,

    /// Use an alternate config file (useful for tests)
    #[arg(global = true, long = "config", hide = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
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

    /// Plan a trip and render its duty logs
    Plan {
        /// Current location
        #[arg(long = "from", value_name = "LOCATION")]
        from: String,

        /// Pickup location
        #[arg(long = "pickup", value_name = "LOCATION")]
        pickup: String,

        /// Dropoff location
        #[arg(long = "dropoff", value_name = "LOCATION")]
        dropoff: String,

        /// Cycle hours already used in the current regulatory cycle
        #[arg(long = "cycle-hours", value_name = "HOURS")]
        cycle_hours: f64,

        /// Trip start (ISO-8601); the service defaults to now
        #[arg(long = "start-time", value_name = "TIMESTAMP")]
        start_time: Option<String>,

        /// Output directory for rendered logs
        #[arg(long = "out", value_name = "DIR")]
        out: Option<String>,

        /// Save the raw planning response as JSON
        #[arg(long = "save", value_name = "FILE")]
        save: Option<String>,

        /// Log output format
        #[arg(long, value_enum)]
        format: Option<RenderFormat>,
    },

    /// Render duty logs from a saved planning response
    Render {
        #[arg(long = "input", value_name = "FILE")]
        input: String,

        /// Output directory for rendered logs
        #[arg(long = "out", value_name = "DIR")]
        out: Option<String>,

        /// Log output format
        #[arg(long, value_enum)]
        format: Option<RenderFormat>,

        /// Render only this day (YYYY-MM-DD)
        #[arg(long = "date", value_name = "DATE")]
        date: Option<String>,
    },

    /// Export duty segments from a saved planning response
    Export {
        #[arg(long = "input", value_name = "FILE")]
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
