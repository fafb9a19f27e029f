//! Aggregate command - fold a raw league pitch log into an outcome table

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{create_spinner, print_subsection},
    statcast::{self, MIN_OBSERVATIONS},
    storage::store_for_path,
};

#[derive(Debug, Parser)]
pub struct AggregateArgs {
    /// Raw league pitch log (CSV with Statcast columns)
    pub input: PathBuf,

    /// Where to write the aggregated table (.json, .msgpack, or .mpk)
    pub output: PathBuf,

    /// Keep only triples seen more than this many times
    #[arg(long, default_value_t = MIN_OBSERVATIONS)]
    pub min_observations: u32,
}

pub fn run(args: &AggregateArgs) -> Result<()> {
    let store = store_for_path(&args.output)?;

    let spinner = create_spinner(&format!("Reading {}", args.input.display()));
    let loaded = statcast::read_pitch_log(&args.input)?;
    spinner.finish_with_message(format!(
        "Read {} pitches ({} rows skipped)",
        loaded.records.len(),
        loaded.skipped
    ));

    let spinner = create_spinner("Aggregating outcome statistics");
    let table = statcast::aggregate(&loaded.records, args.min_observations);
    spinner.finish_with_message(format!("Aggregated {} table rows", table.len()));

    store.save(&table, &args.output)?;

    print_subsection("Aggregation summary");
    println!("Pitches:        {}", loaded.records.len());
    println!("Rows skipped:   {}", loaded.skipped);
    println!("Table rows:     {}", table.len());
    println!("Written to:     {}", args.output.display());

    Ok(())
}
