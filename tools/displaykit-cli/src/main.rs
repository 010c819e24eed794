//! DisplayKit CLI — Command-line interface for display queries, mirroring,
//! and screenshots.
//!
//! Usage:
//!   displaykit list                 List all connected displays
//!   displaykit primary              Show the primary display
//!   displaykit info <ID>            Show one display by id
//!   displaykit mirror <FIRST>       Enable/disable mirroring
//!   displaykit screenshot <ID>      Capture a display to an image file
//!   displaykit call <METHOD>        Raw scripting surface (JSON params)
//!   displaykit check                Check system capabilities

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use displaykit_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "displaykit",
    about = "Display enumeration, mirroring, and screenshots",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all connected displays
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the primary display
    Primary {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one display by id
    Info {
        /// Display id (see `displaykit list`)
        id: u32,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Enable or disable display mirroring
    Mirror {
        /// Display that mirrors (or stops mirroring)
        first: u32,

        /// Display being mirrored; omitted lets the backend pick
        second: Option<u32>,

        /// Stop mirroring instead of starting it
        #[arg(long)]
        disable: bool,
    },

    /// Capture a display to an image file
    Screenshot {
        /// Display id to capture
        id: u32,

        /// Image format: png, jpeg, or tiff (default from config)
        #[arg(short, long)]
        format: Option<String>,

        /// Capture region as X,Y,WIDTH,HEIGHT in virtual-screen
        /// coordinates; full display when omitted
        #[arg(short, long)]
        bounds: Option<String>,

        /// Output file path (default: timestamped file in the configured
        /// output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Call a scripting-surface method with positional JSON params
    Call {
        /// Method name (e.g. getAllDisplays, screenshot)
        method: String,

        /// JSON array of positional parameters, e.g. '[1, {"format":"png"}]'
        params: Option<String>,

        /// Where to write returned image bytes
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check system capabilities
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with --verbose taking precedence
    let mut logging = AppConfig::load().logging;
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    displaykit_common::logging::init_logging(&logging);

    match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Primary { json } => commands::info::run_primary(json),
        Commands::Info { id, json } => commands::info::run(id, json),
        Commands::Mirror {
            first,
            second,
            disable,
        } => commands::mirror::run(first, second, !disable),
        Commands::Screenshot {
            id,
            format,
            bounds,
            output,
        } => commands::screenshot::run(id, format, bounds, output),
        Commands::Call {
            method,
            params,
            output,
        } => commands::call::run(method, params, output),
        Commands::Check => commands::check::run(),
    }
}
