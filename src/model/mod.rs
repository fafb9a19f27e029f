//! The at-bat decision process
//!
//! [`PitchModel`] is an immutable value object built once from the
//! aggregated league table. It owns the fixed action enumeration and the
//! per-triple support index, and exposes pure derivations: the transition
//! tensor, the reward tables, observation tuples for a player's log, greedy
//! policy extraction, and the diagnostic heat map. All mutable solving
//! state (the Q table) stays with the caller.

pub mod actions;
pub mod heat_map;
pub mod observations;
pub mod policy;
pub mod rewards;
pub mod transitions;

use std::collections::{HashMap, HashSet};

pub use actions::{ACTION_LIMIT, ActionSet};
pub use heat_map::{GRID_COLS, GRID_ROWS, HeatMap, ZonePlane};
pub use observations::{Observation, ObservationLog};
pub use rewards::{RewardTable, StateRewards};
pub use transitions::{OutcomeBreakdown, TransitionTensor};

use crate::{
    error::Result,
    q_table::QTable,
    state::{Count, FIELD_OUT, HIT, NUM_COUNT_STATES, NUM_STATES, STRIKEOUT, WALK},
    statcast::{OutcomeStats, OutcomeTable, PitchRecord},
    types::{PitchCall, PitchType, Zone},
};

/// The finite decision process for one league calibration.
#[derive(Debug, Clone)]
pub struct PitchModel {
    actions: ActionSet,
    stats: HashMap<(usize, PitchType, Zone), OutcomeStats>,
    no_data: HashSet<(usize, PitchType, Zone)>,
    rewards: StateRewards,
}

impl PitchModel {
    /// Build the model from the aggregated outcome table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyOutcomeTable`] if the table has no rows.
    pub fn new(table: &OutcomeTable) -> Result<Self> {
        let actions = ActionSet::from_table(table)?;

        let mut stats = HashMap::with_capacity(table.len());
        for entry in table.iter() {
            // Outcome rows exist for count states only.
            if entry.count_state >= NUM_COUNT_STATES {
                continue;
            }
            stats.insert(
                (entry.count_state, entry.pitch_type, entry.zone),
                entry.stats,
            );
        }

        // Support mask over every state, terminals included: terminal
        // states never carry rows, so their transitions fall through to
        // the no-data pricing.
        let mut no_data = HashSet::new();
        for state in 0..NUM_STATES {
            for (_, call) in actions.iter() {
                let key = (state, call.pitch_type, call.zone);
                if !stats.contains_key(&key) {
                    no_data.insert(key);
                }
            }
        }

        Ok(PitchModel {
            actions,
            stats,
            no_data,
            rewards: StateRewards::run_values(),
        })
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Whether a triple lacked league support and is priced as a
    /// guaranteed hit.
    pub fn lacks_support(&self, count_state: usize, pitch_type: PitchType, zone: Zone) -> bool {
        self.no_data.contains(&(count_state, pitch_type, zone))
    }

    /// The run-value delta table indexed by (state, next state).
    pub fn state_rewards(&self) -> &StateRewards {
        &self.rewards
    }

    /// Derive the full transition tensor.
    ///
    /// Supported triples get the outcome decomposition; unsupported ones
    /// put probability 1 on the hit outcome.
    pub fn transition_tensor(&self) -> TransitionTensor {
        let mut tensor = TransitionTensor::zeros(self.actions.len());

        for state in 0..NUM_STATES {
            for (action, call) in self.actions.iter() {
                let row = tensor.row_mut(state, action);
                let key = (state, call.pitch_type, call.zone);
                let Some(stats) = self.stats.get(&key) else {
                    row[HIT] = 1.0;
                    continue;
                };

                let count = Count::from_index(state)
                    .expect("only count states carry outcome rows");
                let b = OutcomeBreakdown::derive(count, stats);

                row[HIT] = b.hit;
                row[FIELD_OUT] = b.out;
                row[WALK] = b.walk;
                row[STRIKEOUT] = b.strikeout;
                if let Some(next) = count.with_strike() {
                    row[next.index()] = b.strike_advance;
                }
                if let Some(next) = count.with_ball() {
                    row[next.index()] = b.ball_advance;
                }
                if count.has_two_strikes() {
                    row[state] = b.foul_self;
                }
            }
        }

        tensor
    }

    /// Expected immediate rewards under the given tensor.
    pub fn expected_rewards(&self, tensor: &TransitionTensor) -> RewardTable {
        RewardTable::expected(&self.rewards, tensor)
    }

    /// Convert one player's log into observation tuples.
    pub fn observations(&self, records: &[PitchRecord]) -> ObservationLog {
        observations::extract(&self.actions, &self.rewards, records)
    }

    /// The greedy pitch call per count state under `q`, restricted to the
    /// arsenal. The snapshot is copied for masking, never mutated.
    pub fn pitch_sequence(&self, q: &QTable, arsenal: &[PitchType]) -> Vec<PitchCall> {
        policy::pitch_sequence(q, &self.actions, arsenal)
    }

    /// Diagnostic heat-map grids for `q` over the arsenal.
    pub fn heat_map(&self, q: &QTable, arsenal: &[PitchType]) -> HeatMap {
        heat_map::generate(q, &self.actions, arsenal, |state, pitch_type, zone| {
            self.lacks_support(state, pitch_type, zone)
        })
    }
}
