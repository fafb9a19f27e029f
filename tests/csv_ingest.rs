//! CSV ingest of Statcast-shaped pitch logs.

use std::io::Write;

use pitch_perfect::{PitchDescription, PlateEvent, read_pitch_log};
use tempfile::TempDir;

const SAMPLE: &str = "\
game_date,pitch_type,zone,events,description,balls,strikes,release_speed
2024-05-01,FF,5.0,,called_strike,0,0,95.3
2024-05-01,SL,13.0,strikeout,swinging_strike,1,2,87.1
2024-05-01,,5.0,,ball,1,0,94.8
2024-05-01,CH,10.0,,ball,2,0,84.0
2024-05-01,CU,2.0,sac_fly,hit_into_play,2,1,78.9
";

#[test]
fn ingest_types_rows_and_skips_the_rest() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("pitches.csv");
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(SAMPLE.as_bytes()))
        .expect("write sample csv");

    let loaded = read_pitch_log(&path).expect("load");

    // The blank pitch type and the invalid zone 10 drop out.
    assert_eq!(loaded.records.len(), 3);
    assert_eq!(loaded.skipped, 2);

    let first = loaded.records[0];
    assert_eq!(first.pitch_type.code(), "FF");
    assert_eq!(first.zone.value(), 5);
    assert_eq!(first.description, PitchDescription::CalledStrike);
    assert_eq!(first.events, None);

    let second = loaded.records[1];
    assert_eq!(second.events, Some(PlateEvent::Strikeout));
    assert_eq!(second.balls, 1);
    assert_eq!(second.strikes, 2);

    // Unmodeled events survive ingest as the catch-all category.
    let third = loaded.records[2];
    assert_eq!(third.events, Some(PlateEvent::Other));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    assert!(read_pitch_log(&dir.path().join("absent.csv")).is_err());
}
