//! Recommend command - solve a pitcher-batter matchup

use std::{fs::File, path::PathBuf};

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, print_section, print_subsection},
    matchup::{self, PassDiagnostics},
    model::PitchModel,
    solver::{DEFAULT_LEARNING_RATE, Solver},
    state::{Count, NUM_COUNT_STATES},
    statcast,
    storage::store_for_path,
};

#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// Aggregated league outcome table (.json, .msgpack, or .mpk)
    #[arg(long)]
    pub league: PathBuf,

    /// The pitcher's play-by-play log (CSV)
    #[arg(long)]
    pub pitcher_log: PathBuf,

    /// The batter's play-by-play log (CSV)
    #[arg(long)]
    pub batter_log: PathBuf,

    /// Learning rate for the personalization passes
    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Write the diagnostic heat map as JSON
    #[arg(long)]
    pub heat_map: Option<PathBuf>,
}

pub fn run(args: &RecommendArgs) -> Result<()> {
    if !args.learning_rate.is_finite() || !(0.0..=1.0).contains(&args.learning_rate) {
        bail!(crate::Error::InvalidLearningRate {
            value: args.learning_rate
        });
    }

    let table = store_for_path(&args.league)?.load(&args.league)?;
    let model = PitchModel::new(&table)?;

    let pitcher = statcast::read_pitch_log(&args.pitcher_log)?;
    let batter = statcast::read_pitch_log(&args.batter_log)?;

    let spinner = create_spinner("Solving league baseline");
    let solver = Solver::new(&model);
    let baseline = solver.initialize_q();
    spinner.finish_with_message("League baseline solved");

    let spinner = create_spinner("Personalizing matchup");
    let report = matchup::personalize(
        &model,
        &baseline,
        &pitcher.records,
        &batter.records,
        args.learning_rate,
    );
    spinner.finish_with_message("Matchup personalized");

    print_section("Recommended pitch sequence");
    for (state, call) in report.sequence.iter().enumerate() {
        let count = Count::from_index(state)?;
        println!("{count}: {call}");
    }
    debug_assert_eq!(report.sequence.len(), NUM_COUNT_STATES);

    print_subsection("Arsenal");
    let names: Vec<&str> = report.arsenal.iter().map(|p| p.name()).collect();
    println!("{}", names.join(", "));

    print_subsection("Personalization passes");
    print_pass("Pitcher", &report.pitcher_pass);
    print_pass("Batter", &report.batter_pass);

    if let Some(path) = &args.heat_map {
        let heat_map = model.heat_map(&report.q, &report.arsenal);
        serde_json::to_writer_pretty(File::create(path)?, &heat_map)?;
        println!("\nHeat map written to {}", path.display());
    }

    Ok(())
}

fn print_pass(label: &str, diagnostics: &PassDiagnostics) {
    println!(
        "{label}: {} observations ({} unknown pitches, {} unclassified outcomes skipped)",
        diagnostics.observations, diagnostics.unknown_actions, diagnostics.unrecognized_outcomes
    );
}
