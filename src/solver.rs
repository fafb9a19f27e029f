//! MDP solving: value iteration and Q-learning personalization
//!
//! The solver freezes the model's reward and transition tensors once, runs
//! undiscounted value iteration for a fixed sweep budget to obtain the
//! league-wide state values, and expands them into the baseline Q table.
//! Per-player personalization is a pure function over a snapshot of that
//! table; the baseline itself is never touched.
//!
//! Convergence is never checked: the sweep budget substitutes for a
//! tolerance, and terminal states settle at value 0 because their forced
//! transitions carry no reward.

use crate::{
    model::{Observation, PitchModel, RewardTable, TransitionTensor},
    q_table::QTable,
    state::NUM_STATES,
};

/// Bellman sweeps run by [`Solver::value_iteration`].
pub const VALUE_ITERATION_SWEEPS: usize = 1000;

/// Passes over a player's log made by [`q_learn`].
pub const PERSONALIZATION_EPOCHS: usize = 100;

/// Default learning rate for the personalization passes.
pub const DEFAULT_LEARNING_RATE: f64 = 0.3;

/// Value-iteration solver over one model's tensors.
#[derive(Debug, Clone)]
pub struct Solver {
    rewards: RewardTable,
    transitions: TransitionTensor,
}

impl Solver {
    /// Derive the reward and transition tensors from the model.
    pub fn new(model: &PitchModel) -> Self {
        let transitions = model.transition_tensor();
        let rewards = model.expected_rewards(&transitions);
        Solver {
            rewards,
            transitions,
        }
    }

    /// One Bellman backup: the best action's expected reward plus
    /// expected continuation value.
    fn bellman_backup(&self, u: &[f64; NUM_STATES], state: usize) -> f64 {
        let mut best = f64::NEG_INFINITY;
        for action in 0..self.transitions.num_actions() {
            let continuation: f64 = self
                .transitions
                .row(state, action)
                .iter()
                .zip(u.iter())
                .map(|(&p, &value)| p * value)
                .sum();
            best = best.max(self.rewards.get(state, action) + continuation);
        }
        best
    }

    /// One synchronous sweep over all states.
    pub fn sweep(&self, u: &[f64; NUM_STATES]) -> [f64; NUM_STATES] {
        std::array::from_fn(|state| self.bellman_backup(u, state))
    }

    /// Run [`VALUE_ITERATION_SWEEPS`] sweeps from a zero vector.
    pub fn value_iteration(&self) -> [f64; NUM_STATES] {
        let mut u = [0.0; NUM_STATES];
        for _ in 0..VALUE_ITERATION_SWEEPS {
            u = self.sweep(&u);
        }
        u
    }

    /// The league-wide baseline Q: one Bellman expansion from the
    /// converged state values.
    pub fn initialize_q(&self) -> QTable {
        let u = self.value_iteration();
        let mut q = QTable::zeros(self.transitions.num_actions());
        for state in 0..NUM_STATES {
            for action in 0..self.transitions.num_actions() {
                let continuation: f64 = self
                    .transitions
                    .row(state, action)
                    .iter()
                    .zip(u.iter())
                    .map(|(&p, &value)| p * value)
                    .sum();
                q.set(state, action, self.rewards.get(state, action) + continuation);
            }
        }
        q
    }
}

/// Personalize a Q snapshot against one player's observed outcomes.
///
/// Runs [`PERSONALIZATION_EPOCHS`] passes over the log in order, applying
/// the undiscounted temporal-difference update with learning rate `eta`.
/// Returns a new table; the input snapshot is left as-is. An empty log or a
/// zero learning rate returns an identical copy.
pub fn q_learn(q: &QTable, observations: &[Observation], eta: f64) -> QTable {
    let mut updated = q.clone();
    for _ in 0..PERSONALIZATION_EPOCHS {
        for obs in observations {
            updated.td_update(obs.state, obs.action, obs.reward, obs.next_state, eta);
        }
    }
    updated
}
