//! Avoda — worker daily-program roster CLI.
//!
//! # Usage
//!
//! ```text
//! avoda add <name>
//! avoda remove <name>
//! avoda list [--json]
//! avoda program show <name>
//! avoda program set <name> [--text <text> | --file <path>]   (stdin by default)
//! avoda export [--out <path>] [--font <ttf>] [--draft <name>=<file>]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, export::ExportArgs, list::ListArgs, program::ProgramCommand, remove::RemoveArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "avoda",
    version,
    about = "Manage worker daily programs and export them as a right-to-left PDF",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a worker to the roster.
    Add(AddArgs),

    /// Remove a worker from the roster.
    Remove(RemoveArgs),

    /// List all workers and their program status.
    List(ListArgs),

    /// Show or set a worker's daily program.
    Program {
        #[command(subcommand)]
        command: ProgramCommand,
    },

    /// Export one PDF page per worker.
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Add(args) => args.run(),
        Commands::Remove(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Program { command } => commands::program::run(command),
        Commands::Export(args) => args.run(),
    }
}
