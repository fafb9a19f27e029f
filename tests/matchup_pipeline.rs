//! End-to-end matchup personalization.

use pitch_perfect::{
    DEFAULT_LEARNING_RATE, PitchDescription, PitchModel, PitchType, PlateEvent, Solver,
    personalize,
    state::{FIELD_OUT, HIT},
};

mod common;

fn solved() -> (PitchModel, pitch_perfect::QTable) {
    let model =
        PitchModel::new(&common::full_support_table()).expect("model construction should succeed");
    let baseline = Solver::new(&model).initialize_q();
    (model, baseline)
}

#[test]
fn baseline_snapshot_is_never_mutated() {
    let (model, baseline) = solved();
    let before = baseline.clone();

    let pitcher_log = vec![common::record(
        PitchType::FourSeam,
        5,
        0,
        0,
        PitchDescription::HitIntoPlay,
        Some(PlateEvent::Single),
    )];
    let batter_log = vec![common::record(
        PitchType::FourSeam,
        5,
        1,
        1,
        PitchDescription::CalledStrike,
        None,
    )];

    let report = personalize(
        &model,
        &baseline,
        &pitcher_log,
        &batter_log,
        DEFAULT_LEARNING_RATE,
    );
    assert_eq!(baseline, before);
    assert_ne!(report.q, baseline);
}

#[test]
fn batter_pass_has_the_last_word() {
    let (model, baseline) = solved();

    // Pitcher's log: this call always surrendered a hit. Batter's log:
    // the same call always produced a field out. Both drive Q(0, FF z5)
    // toward their own terminal reward; the batter pass runs second and
    // wins.
    let pitcher_log = vec![common::record(
        PitchType::FourSeam,
        5,
        0,
        0,
        PitchDescription::HitIntoPlay,
        Some(PlateEvent::Single),
    )];
    let batter_log = vec![common::record(
        PitchType::FourSeam,
        5,
        0,
        0,
        PitchDescription::HitIntoPlay,
        Some(PlateEvent::FieldOut),
    )];

    let report = personalize(
        &model,
        &baseline,
        &pitcher_log,
        &batter_log,
        DEFAULT_LEARNING_RATE,
    );

    let rewards = model.state_rewards();
    let hit_value = rewards.get(0, HIT);
    let out_value = rewards.get(0, FIELD_OUT);
    let cell = report.q.get(0, 0);

    // 100 epochs at eta 0.3 converge to the pass's fixed point.
    assert!((cell - out_value).abs() < 1e-6, "cell {cell}");
    assert!((cell - hit_value).abs() > 0.5);
}

#[test]
fn logs_with_no_usable_rows_leave_the_baseline_values() {
    let (model, baseline) = solved();

    // Every row references a pitch outside the enumeration.
    let pitcher_log = vec![common::record(
        PitchType::Knuckleball,
        9,
        0,
        0,
        PitchDescription::Ball,
        None,
    )];

    let report = personalize(&model, &baseline, &pitcher_log, &[], DEFAULT_LEARNING_RATE);
    assert_eq!(report.q, baseline);
    assert_eq!(report.pitcher_pass.unknown_actions, 1);
    assert_eq!(report.pitcher_pass.observations, 0);

    // The arsenal still comes from the pitcher's log.
    assert_eq!(report.arsenal, vec![PitchType::Knuckleball]);
}

#[test]
fn sequence_respects_the_pitchers_arsenal() {
    let (model, baseline) = solved();

    let pitcher_log = vec![common::record(
        PitchType::Slider,
        13,
        0,
        0,
        PitchDescription::Ball,
        None,
    )];

    let report = personalize(&model, &baseline, &pitcher_log, &[], DEFAULT_LEARNING_RATE);
    assert!(
        report
            .sequence
            .iter()
            .all(|call| call.pitch_type == PitchType::Slider)
    );
}
