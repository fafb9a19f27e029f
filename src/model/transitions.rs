//! Transition probabilities
//!
//! `OutcomeBreakdown` decomposes one (count, pitch call) pair's empirical
//! rates into the seven modeled outcomes; `TransitionTensor` is the full
//! `[16][A][16]` table of P(next state | state, action). For a supported
//! triple the seven outcome masses sum to 1; an unsupported triple instead
//! puts all mass on the hit outcome, which prices the pitch as a guaranteed
//! worst case rather than leaving the row empty.

use crate::{
    state::{Count, NUM_STATES},
    statcast::OutcomeStats,
};

/// Probability of each modeled outcome for one (count, pitch call) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeBreakdown {
    /// Batter swings and puts a hit in play.
    pub hit: f64,
    /// Batter swings, ball in play, not a hit.
    pub out: f64,
    /// Ball four taken. Zero unless the count has three balls.
    pub walk: f64,
    /// Strike three, swinging or called. Zero unless the count has two
    /// strikes.
    pub strikeout: f64,
    /// Strike count advances (taken strike, whiff, or foul). Zero at two
    /// strikes.
    pub strike_advance: f64,
    /// Ball count advances. Zero at three balls.
    pub ball_advance: f64,
    /// Foul with two strikes; the count holds. Zero below two strikes,
    /// where a foul advances the strike count instead.
    pub foul_self: f64,
}

impl OutcomeBreakdown {
    /// Decompose empirical conditional rates for a pitch thrown in `count`.
    pub fn derive(count: Count, stats: &OutcomeStats) -> Self {
        let swing = stats.swing_rate;
        let take = 1.0 - swing;
        let taken_strike = stats.strike_rate;

        let hit = swing * stats.hit_rate;
        let out = swing * (1.0 - stats.hit_rate - stats.whiff_rate - stats.foul_rate);

        let walk = if count.has_three_balls() {
            take * (1.0 - taken_strike)
        } else {
            0.0
        };

        let (strikeout, strike_advance, foul_self) = if count.has_two_strikes() {
            (
                swing * stats.whiff_rate + take * taken_strike,
                0.0,
                swing * stats.foul_rate,
            )
        } else {
            (
                0.0,
                take * taken_strike + swing * (stats.whiff_rate + stats.foul_rate),
                0.0,
            )
        };

        let ball_advance = if count.has_three_balls() {
            0.0
        } else {
            take * (1.0 - taken_strike)
        };

        OutcomeBreakdown {
            hit,
            out,
            walk,
            strikeout,
            strike_advance,
            ball_advance,
            foul_self,
        }
    }
}

/// Dense transition tensor T over (state, action, next state).
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTensor {
    num_actions: usize,
    probs: Vec<f64>,
}

impl TransitionTensor {
    pub(crate) fn zeros(num_actions: usize) -> Self {
        TransitionTensor {
            num_actions,
            probs: vec![0.0; NUM_STATES * num_actions * NUM_STATES],
        }
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    pub fn get(&self, state: usize, action: usize, next_state: usize) -> f64 {
        self.probs[(state * self.num_actions + action) * NUM_STATES + next_state]
    }

    /// The outgoing probability row for one (state, action) pair.
    pub fn row(&self, state: usize, action: usize) -> &[f64] {
        let start = (state * self.num_actions + action) * NUM_STATES;
        &self.probs[start..start + NUM_STATES]
    }

    pub(crate) fn row_mut(&mut self, state: usize, action: usize) -> &mut [f64] {
        let start = (state * self.num_actions + action) * NUM_STATES;
        &mut self.probs[start..start + NUM_STATES]
    }
}
