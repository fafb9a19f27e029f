//! Greedy policy extraction
//!
//! Masks the action-value table down to a pitcher's arsenal and reads off
//! the best call per count state. Masking always produces a fresh table;
//! the caller's snapshot is never touched, so one solved table can serve
//! policy extraction and heat-map generation for any number of arsenals.

use crate::{
    model::actions::ActionSet,
    q_table::QTable,
    state::{NUM_COUNT_STATES, NUM_STATES},
    types::{PitchCall, PitchType},
};

/// Value forced onto actions outside the arsenal. Large enough negative
/// that no league-calibrated Q value can compete.
pub(crate) const OUT_OF_ARSENAL: f64 = -10_000.0;

/// A copy of `q` with every action whose pitch type is outside `arsenal`
/// pinned to [`OUT_OF_ARSENAL`] across all states.
pub(crate) fn masked_for_arsenal(
    q: &QTable,
    actions: &ActionSet,
    arsenal: &[PitchType],
) -> QTable {
    let mut masked = q.clone();
    for (action, call) in actions.iter() {
        if !arsenal.contains(&call.pitch_type) {
            for state in 0..NUM_STATES {
                masked.set(state, action, OUT_OF_ARSENAL);
            }
        }
    }
    masked
}

/// The greedy pitch call per count state, in state-index order 0..12.
/// Ties go to the lowest action index.
pub(crate) fn pitch_sequence(
    q: &QTable,
    actions: &ActionSet,
    arsenal: &[PitchType],
) -> Vec<PitchCall> {
    let masked = masked_for_arsenal(q, actions, arsenal);
    (0..NUM_COUNT_STATES)
        .map(|state| actions.call(masked.best_action(state)))
        .collect()
}
