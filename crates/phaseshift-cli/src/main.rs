use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "phaseshift", version, about = "Phaseshift shift-work schedule planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the schedule for a roster document
    Plan {
        /// Path to the TOML roster document
        file: PathBuf,
        /// Print structured day plans as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the per-day classification behind the schedule
    Days {
        /// Path to the TOML roster document
        file: PathBuf,
    },
    /// Write a sample roster document to get started
    Init {
        /// Path to write the sample to
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { file, json } => commands::plan::run(&file, json),
        Commands::Days { file } => commands::days::run(&file),
        Commands::Init { file } => commands::init::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
