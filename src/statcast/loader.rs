//! CSV ingest for raw Statcast pitch logs
//!
//! Reads season-wide or per-player exports. Statcast CSVs carry many more
//! columns than the six used here and leave fields blank on unresolved
//! pitches; rows that cannot be typed are skipped and counted rather than
//! failing the load.

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    state::Count,
    statcast::records::{PitchDescription, PitchRecord, PlateEvent},
    types::Zone,
};

/// Untyped row as it appears in the CSV.
#[derive(Debug, Deserialize)]
struct RawRow {
    pitch_type: Option<String>,
    zone: Option<f64>,
    balls: Option<u8>,
    strikes: Option<u8>,
    description: Option<String>,
    events: Option<String>,
}

/// Result of loading a pitch log.
#[derive(Debug)]
pub struct LoadedPitches {
    pub records: Vec<PitchRecord>,
    /// Rows dropped for missing or untypeable fields.
    pub skipped: usize,
}

/// Read a pitch log CSV into typed records.
///
/// # Errors
///
/// Returns [`Error::Io`] / [`Error::Csv`] on unreadable files or malformed
/// CSV structure. Individual rows that fail validation are skipped, not
/// errors.
pub fn read_pitch_log(path: &Path) -> Result<LoadedPitches> {
    let file = std::fs::File::open(path).map_err(|source| Error::Io {
        operation: format!("open pitch log {}", path.display()),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.deserialize::<RawRow>() {
        match convert(row?) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    Ok(LoadedPitches { records, skipped })
}

fn convert(raw: RawRow) -> Option<PitchRecord> {
    let pitch_type = raw.pitch_type?.parse().ok()?;

    // Zones are exported as floats ("11.0").
    let zone = raw.zone?;
    if !zone.is_finite() || zone.fract() != 0.0 {
        return None;
    }
    let zone = Zone::new(zone as u8).ok()?;

    let balls = raw.balls?;
    let strikes = raw.strikes?;
    Count::new(balls, strikes).ok()?;

    let description = PitchDescription::from_code(&raw.description?);
    let events = raw
        .events
        .filter(|event| !event.is_empty())
        .map(|event| PlateEvent::from_code(&event));

    Some(PitchRecord {
        pitch_type,
        zone,
        balls,
        strikes,
        description,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_typed_row() {
        let raw = RawRow {
            pitch_type: Some("SL".to_string()),
            zone: Some(13.0),
            balls: Some(1),
            strikes: Some(2),
            description: Some("swinging_strike".to_string()),
            events: Some("strikeout".to_string()),
        };
        let record = convert(raw).unwrap();
        assert_eq!(record.pitch_type.code(), "SL");
        assert_eq!(record.zone.value(), 13);
        assert_eq!(record.description, PitchDescription::SwingingStrike);
        assert_eq!(record.events, Some(PlateEvent::Strikeout));
    }

    #[test]
    fn test_convert_skips_incomplete_rows() {
        let raw = RawRow {
            pitch_type: None,
            zone: Some(5.0),
            balls: Some(0),
            strikes: Some(0),
            description: Some("ball".to_string()),
            events: None,
        };
        assert!(convert(raw).is_none());
    }

    #[test]
    fn test_convert_skips_invalid_zone_and_count() {
        let base = RawRow {
            pitch_type: Some("FF".to_string()),
            zone: Some(10.0),
            balls: Some(0),
            strikes: Some(0),
            description: Some("ball".to_string()),
            events: None,
        };
        assert!(convert(base).is_none());

        let bad_count = RawRow {
            pitch_type: Some("FF".to_string()),
            zone: Some(5.0),
            balls: Some(4),
            strikes: Some(0),
            description: Some("ball".to_string()),
            events: None,
        };
        assert!(convert(bad_count).is_none());
    }

    #[test]
    fn test_convert_treats_empty_events_as_nonterminal() {
        let raw = RawRow {
            pitch_type: Some("CH".to_string()),
            zone: Some(5.0),
            balls: Some(2),
            strikes: Some(1),
            description: Some("foul".to_string()),
            events: Some(String::new()),
        };
        assert_eq!(convert(raw).unwrap().events, None);
    }
}
