//! Observation tuples for personalization
//!
//! Converts one player's play-by-play log into (state, action, reward,
//! next state) tuples. The pass is lenient: a pitch outside the fixed
//! action enumeration is skipped silently, and a row whose outcome cannot
//! be classified is skipped with a diagnostic count instead of failing the
//! extraction.

use crate::{
    model::{actions::ActionSet, rewards::StateRewards},
    state::{Count, State},
    statcast::{PitchDescription, PitchRecord, PlateEvent},
};

/// One (state, action, reward, next state) tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub state: usize,
    pub action: usize,
    pub reward: f64,
    pub next_state: usize,
}

/// Tuples extracted from one player's log, plus skip diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ObservationLog {
    pub observations: Vec<Observation>,
    /// Rows whose (pitch type, zone) is outside the fixed enumeration.
    pub unknown_actions: usize,
    /// Rows whose description/event matches no modeled outcome.
    pub unrecognized_outcomes: usize,
}

impl ObservationLog {
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

pub(crate) fn extract(
    actions: &ActionSet,
    rewards: &StateRewards,
    records: &[PitchRecord],
) -> ObservationLog {
    let mut log = ObservationLog::default();

    for record in records {
        let Some(action) = actions.position(record.pitch_type, record.zone) else {
            log.unknown_actions += 1;
            continue;
        };

        let Ok(count) = record.count() else {
            log.unrecognized_outcomes += 1;
            continue;
        };

        let Some(next_state) = resolve_next_state(count, record) else {
            log.unrecognized_outcomes += 1;
            continue;
        };

        let state = count.index();
        let next_state = next_state.index();
        log.observations.push(Observation {
            state,
            action,
            reward: rewards.get(state, next_state),
            next_state,
        });
    }

    log
}

/// Classify a pitch's outcome into the state it leads to.
///
/// Resolution priority: ball in play, then plate-appearance events
/// (strikeout, walk, hit by pitch), then the per-pitch description. A
/// strike-type description at two strikes is a terminal strikeout; a foul
/// at two strikes holds the count. Returns `None` for anything outside the
/// modeled categories, including a ball at three balls with no walk event.
fn resolve_next_state(count: Count, record: &PitchRecord) -> Option<State> {
    use PitchDescription as D;

    if record.description == D::HitIntoPlay {
        return Some(match record.events {
            Some(PlateEvent::FieldOut) => State::FieldOut,
            _ => State::Hit,
        });
    }

    if record.events.is_some_and(|event| event.is_strikeout()) {
        return Some(State::Strikeout);
    }
    if record.events.is_some_and(|event| event.is_free_pass()) {
        return Some(State::Walk);
    }

    match record.description {
        D::CalledStrike | D::SwingingStrike | D::MissedBunt | D::SwingingStrikeBlocked => Some(
            count
                .with_strike()
                .map_or(State::Strikeout, State::Count),
        ),
        D::Foul | D::FoulTip | D::FoulBunt => Some(
            count
                .with_strike()
                .map_or(State::Count(count), State::Count),
        ),
        D::Ball | D::BlockedBall => count.with_ball().map(State::Count),
        _ => None,
    }
}
