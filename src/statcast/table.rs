//! Aggregated league-wide outcome statistics
//!
//! The table is the model's only empirical input: for every (count state,
//! pitch type, zone) triple seen often enough league-wide, one row of
//! conditional outcome probabilities. Entry order is significant: the fixed
//! action enumeration is read off the table index in order.

use serde::{Deserialize, Serialize};

use crate::types::{PitchType, Zone};

/// Default observation threshold: triples seen fewer times than this over
/// a season carry no row.
pub const MIN_OBSERVATIONS: u32 = 30;

/// Empirical conditional outcome probabilities for one triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeStats {
    /// Number of pitches behind this row (pseudocount included).
    pub observations: u32,
    /// P(batter swings).
    pub swing_rate: f64,
    /// P(miss | swing).
    pub whiff_rate: f64,
    /// P(hit | swing).
    pub hit_rate: f64,
    /// P(called strike | take).
    pub strike_rate: f64,
    /// P(foul | swing).
    pub foul_rate: f64,
}

/// One table row: the triple it describes plus its statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeEntry {
    /// Count-state index (0-11) the pitch was thrown in.
    pub count_state: usize,
    pub pitch_type: PitchType,
    pub zone: Zone,
    pub stats: OutcomeStats,
}

/// Insertion-ordered table of [`OutcomeEntry`] rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutcomeTable {
    entries: Vec<OutcomeEntry>,
}

impl OutcomeTable {
    pub fn new(entries: Vec<OutcomeEntry>) -> Self {
        OutcomeTable { entries }
    }

    pub fn entries(&self) -> &[OutcomeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutcomeEntry> {
        self.entries.iter()
    }
}
