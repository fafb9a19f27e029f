//! Dense action-value table for temporal difference learning
//!
//! Unlike a map keyed by state labels, the table is a fixed-shape
//! `[NUM_STATES][num_actions]` tensor indexed by validated integer codes.
//! Snapshots are cheap to clone; personalization always works on a copy so
//! the league-wide baseline is never mutated in place.

use serde::{Deserialize, Serialize};

use crate::state::NUM_STATES;

/// Action-value table Q over (state, action) pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    num_actions: usize,
    values: Vec<f64>,
}

impl QTable {
    /// Create a zero-initialized table for the given action count.
    pub fn zeros(num_actions: usize) -> Self {
        QTable {
            num_actions,
            values: vec![0.0; NUM_STATES * num_actions],
        }
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.values[state * self.num_actions + action]
    }

    pub fn set(&mut self, state: usize, action: usize, value: f64) {
        self.values[state * self.num_actions + action] = value;
    }

    /// All action values for a state.
    pub fn row(&self, state: usize) -> &[f64] {
        let start = state * self.num_actions;
        &self.values[start..start + self.num_actions]
    }

    /// Maximum action value in a state.
    pub fn max_over_actions(&self, state: usize) -> f64 {
        self.row(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Index of the best action in a state; ties go to the lowest index.
    pub fn best_action(&self, state: usize) -> usize {
        let mut best = 0;
        let mut best_value = f64::NEG_INFINITY;
        for (action, &value) in self.row(state).iter().enumerate() {
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best
    }

    /// One temporal-difference step toward the observed reward plus the best
    /// value achievable from the resulting state (undiscounted):
    ///
    /// Q(s,a) ← Q(s,a) + η [r + max_a' Q(s',a') − Q(s,a)]
    pub fn td_update(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
        eta: f64,
    ) {
        let max_next = self.max_over_actions(next_state);
        let current = self.get(state, action);
        self.set(state, action, current + eta * (reward + max_next - current));
    }
}
