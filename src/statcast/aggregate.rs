//! League-wide outcome aggregation
//!
//! Folds a season of raw pitches into the conditional outcome table the
//! model is built from. Counts are keyed by (count state, pitch type, zone)
//! and walked count-state by count-state so the table's entry order, and
//! with it the fixed action enumeration, is deterministic.

use std::collections::HashMap;

use crate::{
    state::NUM_COUNT_STATES,
    statcast::{
        records::{PitchDescription, PitchRecord},
        table::{OutcomeEntry, OutcomeStats, OutcomeTable},
    },
    types::{PitchType, Zone},
};

/// Raw tallies for one (count state, pitch type, zone) triple.
///
/// Every counter starts at 1 the first time a triple is seen, so the
/// derived ratios are never a division by zero. The pseudocount stays in
/// the reported observation totals.
struct Tally {
    total: u32,
    swings: u32,
    whiffs: u32,
    strikes: u32,
    hits: u32,
    fouls: u32,
}

impl Tally {
    fn new() -> Self {
        Tally {
            total: 1,
            swings: 1,
            whiffs: 1,
            strikes: 1,
            hits: 1,
            fouls: 1,
        }
    }

    fn record(&mut self, pitch: &PitchRecord) {
        self.total += 1;
        match pitch.description {
            PitchDescription::SwingingStrike => {
                self.swings += 1;
                self.whiffs += 1;
            }
            PitchDescription::HitIntoPlay => self.swings += 1,
            PitchDescription::Foul => {
                self.swings += 1;
                self.fouls += 1;
            }
            PitchDescription::CalledStrike => self.strikes += 1,
            _ => {}
        }
        if pitch.events.is_some_and(|event| event.is_hit()) {
            self.hits += 1;
        }
    }

    fn stats(&self) -> OutcomeStats {
        let total = f64::from(self.total);
        let swings = f64::from(self.swings);
        OutcomeStats {
            observations: self.total,
            swing_rate: swings / total,
            whiff_rate: f64::from(self.whiffs) / swings,
            hit_rate: f64::from(self.hits) / swings,
            strike_rate: f64::from(self.strikes) / f64::from(self.total - self.swings + 1),
            foul_rate: f64::from(self.fouls) / swings,
        }
    }
}

/// Aggregate raw league pitches into an [`OutcomeTable`].
///
/// Only triples with more than `min_observations` pitches (pseudocount
/// included) keep a row. Rows land in count-state order, first-seen order
/// within a count state.
pub fn aggregate(records: &[PitchRecord], min_observations: u32) -> OutcomeTable {
    let mut entries = Vec::new();

    for count_state in 0..NUM_COUNT_STATES {
        let mut order: Vec<(PitchType, Zone)> = Vec::new();
        let mut tallies: HashMap<(PitchType, Zone), Tally> = HashMap::new();

        for record in records {
            let Ok(count) = record.count() else { continue };
            if count.index() != count_state {
                continue;
            }
            let key = (record.pitch_type, record.zone);
            tallies
                .entry(key)
                .or_insert_with(|| {
                    order.push(key);
                    Tally::new()
                })
                .record(record);
        }

        for (pitch_type, zone) in order {
            let tally = &tallies[&(pitch_type, zone)];
            if tally.total > min_observations {
                entries.push(OutcomeEntry {
                    count_state,
                    pitch_type,
                    zone,
                    stats: tally.stats(),
                });
            }
        }
    }

    OutcomeTable::new(entries)
}
