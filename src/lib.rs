//! Pitch-perfect: pitch sequence optimization for pitcher-batter matchups
//!
//! This crate provides:
//! - An at-bat model as a finite Markov decision process over ball-strike
//!   counts, built from aggregated league-wide outcome statistics
//! - A value-iteration solver producing a league baseline action-value table
//! - Per-matchup personalization via temporal-difference learning on a
//!   pitcher's and batter's own play-by-play logs
//! - Greedy policy extraction and diagnostic heat-map generation
//! - League aggregation, CSV ingest, and artifact storage around the core

pub mod cli;
pub mod error;
pub mod matchup;
pub mod model;
pub mod q_table;
pub mod solver;
pub mod state;
pub mod statcast;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use matchup::{MatchupReport, PassDiagnostics, arsenal_from_log, personalize};
pub use model::{
    ACTION_LIMIT, ActionSet, HeatMap, Observation, ObservationLog, OutcomeBreakdown, PitchModel,
    RewardTable, StateRewards, TransitionTensor,
};
pub use q_table::QTable;
pub use solver::{
    DEFAULT_LEARNING_RATE, PERSONALIZATION_EPOCHS, Solver, VALUE_ITERATION_SWEEPS, q_learn,
};
pub use state::{Count, NUM_COUNT_STATES, NUM_STATES, State};
pub use statcast::{
    MIN_OBSERVATIONS, OutcomeEntry, OutcomeStats, OutcomeTable, PitchDescription, PitchRecord,
    PlateEvent, aggregate, read_pitch_log,
};
pub use types::{PitchCall, PitchType, Zone};
