//! Common test utilities for the pitch-perfect test suite.
//!
//! This module provides synthetic outcome tables and play-by-play builders
//! used across multiple tests.

#![allow(dead_code)]

use pitch_perfect::{
    OutcomeEntry, OutcomeStats, OutcomeTable, PitchDescription, PitchRecord, PitchType, PlateEvent,
    Zone,
};
use rand::{Rng, rngs::StdRng};

/// Build outcome statistics from the five empirical rates.
pub fn stats(swing: f64, whiff: f64, hit: f64, strike: f64, foul: f64) -> OutcomeStats {
    OutcomeStats {
        observations: 100,
        swing_rate: swing,
        whiff_rate: whiff,
        hit_rate: hit,
        strike_rate: strike,
        foul_rate: foul,
    }
}

/// A table entry for one (count state, pitch type, zone) triple.
pub fn entry(
    count_state: usize,
    pitch_type: PitchType,
    zone: u8,
    stats: OutcomeStats,
) -> OutcomeEntry {
    OutcomeEntry {
        count_state,
        pitch_type,
        zone: Zone::new(zone).unwrap(),
        stats,
    }
}

/// A play-by-play record for one pitch.
pub fn record(
    pitch_type: PitchType,
    zone: u8,
    balls: u8,
    strikes: u8,
    description: PitchDescription,
    events: Option<PlateEvent>,
) -> PitchRecord {
    PitchRecord {
        pitch_type,
        zone: Zone::new(zone).unwrap(),
        balls,
        strikes,
        description,
        events,
    }
}

/// Sample outcome statistics with valid probability structure: the
/// conditional swing outcomes (whiff, hit, foul) always sum below 1 so
/// every derived outcome mass is non-negative.
pub fn random_stats(rng: &mut StdRng) -> OutcomeStats {
    stats(
        rng.random_range(0.2..0.8),
        0.3 * rng.random::<f64>(),
        0.3 * rng.random::<f64>(),
        rng.random_range(0.1..0.9),
        0.3 * rng.random::<f64>(),
    )
}

/// A table supporting two pitch calls (FF zone 5, SL zone 13) in every
/// count state, with fixed rates.
pub fn full_support_table() -> OutcomeTable {
    let mut entries = Vec::new();
    for count_state in 0..12 {
        entries.push(entry(
            count_state,
            PitchType::FourSeam,
            5,
            stats(0.5, 0.2, 0.1, 0.6, 0.1),
        ));
        entries.push(entry(
            count_state,
            PitchType::Slider,
            13,
            stats(0.4, 0.3, 0.05, 0.3, 0.15),
        ));
    }
    OutcomeTable::new(entries)
}

/// A table supporting every count state for randomized rates over the
/// given pitch calls.
pub fn random_table(rng: &mut StdRng, calls: &[(PitchType, u8)]) -> OutcomeTable {
    let mut entries = Vec::new();
    for count_state in 0..12 {
        for &(pitch_type, zone) in calls {
            entries.push(entry(count_state, pitch_type, zone, random_stats(rng)));
        }
    }
    OutcomeTable::new(entries)
}
