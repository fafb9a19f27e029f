//! Pitch-perfect CLI - pitch sequence optimizer for pitcher-batter matchups
//!
//! This CLI provides a unified interface for:
//! - Aggregating a season of raw league pitches into an outcome table
//! - Solving and personalizing a matchup into a recommended pitch sequence

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pitch-perfect")]
#[command(version, about = "Pitch sequence optimizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a raw league pitch log into an outcome table
    Aggregate(pitch_perfect::cli::commands::aggregate::AggregateArgs),

    /// Recommend a pitch sequence for a pitcher-batter matchup
    Recommend(pitch_perfect::cli::commands::recommend::RecommendArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate(args) => pitch_perfect::cli::commands::aggregate::run(&args),
        Commands::Recommend(args) => pitch_perfect::cli::commands::recommend::run(&args),
    }
}
