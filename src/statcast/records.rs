//! Play-by-play pitch records and their outcome categories

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    state::Count,
    types::{PitchType, Zone},
};

/// Per-pitch outcome description as recorded by Statcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchDescription {
    SwingingStrike,
    SwingingStrikeBlocked,
    CalledStrike,
    Foul,
    FoulTip,
    FoulBunt,
    MissedBunt,
    Ball,
    BlockedBall,
    HitIntoPlay,
    /// Any category outside the modeled set (pitchouts, bunt attempts, ...).
    #[serde(other)]
    Other,
}

impl PitchDescription {
    /// Map a raw description string; unknown categories become [`Self::Other`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "swinging_strike" => PitchDescription::SwingingStrike,
            "swinging_strike_blocked" => PitchDescription::SwingingStrikeBlocked,
            "called_strike" => PitchDescription::CalledStrike,
            "foul" => PitchDescription::Foul,
            "foul_tip" => PitchDescription::FoulTip,
            "foul_bunt" => PitchDescription::FoulBunt,
            "missed_bunt" => PitchDescription::MissedBunt,
            "ball" => PitchDescription::Ball,
            "blocked_ball" => PitchDescription::BlockedBall,
            "hit_into_play" => PitchDescription::HitIntoPlay,
            _ => PitchDescription::Other,
        }
    }
}

/// Plate-appearance event attached to the final pitch of an at-bat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateEvent {
    Single,
    Double,
    Triple,
    HomeRun,
    FieldOut,
    Strikeout,
    StrikeoutDoublePlay,
    Walk,
    HitByPitch,
    /// Any other in-play event (sacrifice, fielder's choice, ...).
    #[serde(other)]
    Other,
}

impl PlateEvent {
    /// Map a raw event string; unknown categories become [`Self::Other`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "single" => PlateEvent::Single,
            "double" => PlateEvent::Double,
            "triple" => PlateEvent::Triple,
            "home_run" => PlateEvent::HomeRun,
            "field_out" => PlateEvent::FieldOut,
            "strikeout" => PlateEvent::Strikeout,
            "strikeout_double_play" => PlateEvent::StrikeoutDoublePlay,
            "walk" => PlateEvent::Walk,
            "hit_by_pitch" => PlateEvent::HitByPitch,
            _ => PlateEvent::Other,
        }
    }

    /// Whether the event put the batter on base with a hit.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            PlateEvent::Single | PlateEvent::Double | PlateEvent::Triple | PlateEvent::HomeRun
        )
    }

    /// Whether the event ended the at-bat on strikes.
    pub fn is_strikeout(&self) -> bool {
        matches!(self, PlateEvent::Strikeout | PlateEvent::StrikeoutDoublePlay)
    }

    /// Whether the event put the batter on base without a swing.
    pub fn is_free_pass(&self) -> bool {
        matches!(self, PlateEvent::Walk | PlateEvent::HitByPitch)
    }
}

/// One pitch from a play-by-play log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchRecord {
    pub pitch_type: PitchType,
    pub zone: Zone,
    pub balls: u8,
    pub strikes: u8,
    pub description: PitchDescription,
    /// Present only on the final pitch of a plate appearance.
    pub events: Option<PlateEvent>,
}

impl PitchRecord {
    /// The count the pitch was thrown in.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCount`] for counts outside 0-3 / 0-2.
    pub fn count(&self) -> Result<Count> {
        Count::new(self.balls, self.strikes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_from_code() {
        assert_eq!(
            PitchDescription::from_code("swinging_strike"),
            PitchDescription::SwingingStrike
        );
        assert_eq!(
            PitchDescription::from_code("pitchout"),
            PitchDescription::Other
        );
    }

    #[test]
    fn test_event_categories() {
        assert!(PlateEvent::from_code("home_run").is_hit());
        assert!(PlateEvent::from_code("strikeout_double_play").is_strikeout());
        assert!(PlateEvent::from_code("hit_by_pitch").is_free_pass());
        assert_eq!(PlateEvent::from_code("sac_fly"), PlateEvent::Other);
        assert!(!PlateEvent::Other.is_hit());
    }

    #[test]
    fn test_record_count() {
        let record = PitchRecord {
            pitch_type: PitchType::FourSeam,
            zone: Zone::new(5).unwrap(),
            balls: 3,
            strikes: 2,
            description: PitchDescription::Ball,
            events: Some(PlateEvent::Walk),
        };
        assert_eq!(record.count().unwrap().index(), 11);
    }
}
