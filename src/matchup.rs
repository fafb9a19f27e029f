//! Matchup personalization pipeline
//!
//! Chains the two Q-learning passes for a pitcher-batter matchup: first the
//! pitcher's own outcomes starting from the league baseline, then the
//! batter's outcomes starting from the pitcher-personalized table. The
//! batter pass runs last deliberately; it has the final word on the
//! matchup-specific values. The caller's baseline snapshot is copied, never
//! mutated, so repeated queries for different matchups are independent.

use serde::{Deserialize, Serialize};

use crate::{
    model::{ObservationLog, PitchModel},
    q_table::QTable,
    solver::q_learn,
    statcast::PitchRecord,
    types::{PitchCall, PitchType},
};

/// Skip/keep counts from one personalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassDiagnostics {
    pub observations: usize,
    pub unknown_actions: usize,
    pub unrecognized_outcomes: usize,
}

impl From<&ObservationLog> for PassDiagnostics {
    fn from(log: &ObservationLog) -> Self {
        PassDiagnostics {
            observations: log.len(),
            unknown_actions: log.unknown_actions,
            unrecognized_outcomes: log.unrecognized_outcomes,
        }
    }
}

/// Result of personalizing a matchup.
#[derive(Debug, Clone)]
pub struct MatchupReport {
    /// Pitch types the pitcher actually throws, in first-seen log order.
    pub arsenal: Vec<PitchType>,
    /// Recommended call per count state, in state-index order 0..12.
    pub sequence: Vec<PitchCall>,
    /// The matchup-personalized action-value table.
    pub q: QTable,
    pub pitcher_pass: PassDiagnostics,
    pub batter_pass: PassDiagnostics,
}

/// Distinct pitch types in a log, in first-seen order.
pub fn arsenal_from_log(records: &[PitchRecord]) -> Vec<PitchType> {
    let mut arsenal = Vec::new();
    for record in records {
        if !arsenal.contains(&record.pitch_type) {
            arsenal.push(record.pitch_type);
        }
    }
    arsenal
}

/// Personalize the league baseline for one pitcher-batter matchup and
/// extract the recommended sequence.
pub fn personalize(
    model: &PitchModel,
    baseline: &QTable,
    pitcher_log: &[PitchRecord],
    batter_log: &[PitchRecord],
    eta: f64,
) -> MatchupReport {
    let pitcher_obs = model.observations(pitcher_log);
    let batter_obs = model.observations(batter_log);

    let pitcher_q = q_learn(baseline, &pitcher_obs.observations, eta);
    let matchup_q = q_learn(&pitcher_q, &batter_obs.observations, eta);

    let arsenal = arsenal_from_log(pitcher_log);
    let sequence = model.pitch_sequence(&matchup_q, &arsenal);

    MatchupReport {
        arsenal,
        sequence,
        q: matchup_q,
        pitcher_pass: PassDiagnostics::from(&pitcher_obs),
        batter_pass: PassDiagnostics::from(&batter_obs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{statcast::PitchDescription, types::Zone};

    #[test]
    fn test_arsenal_preserves_first_seen_order() {
        let record = |pitch_type| PitchRecord {
            pitch_type,
            zone: Zone::new(5).unwrap(),
            balls: 0,
            strikes: 0,
            description: PitchDescription::Ball,
            events: None,
        };
        let log = vec![
            record(PitchType::Slider),
            record(PitchType::FourSeam),
            record(PitchType::Slider),
            record(PitchType::Changeup),
        ];
        assert_eq!(
            arsenal_from_log(&log),
            vec![PitchType::Slider, PitchType::FourSeam, PitchType::Changeup]
        );
    }

    #[test]
    fn test_pass_diagnostics_from_log() {
        let log = ObservationLog {
            observations: Vec::new(),
            unknown_actions: 3,
            unrecognized_outcomes: 1,
        };
        let diag = PassDiagnostics::from(&log);
        assert_eq!(diag.observations, 0);
        assert_eq!(diag.unknown_actions, 3);
        assert_eq!(diag.unrecognized_outcomes, 1);
    }
}
