//! End-to-end checks from form text to the figures shown on the page.

use pedal_generator::animation::Tween;
use pedal_generator::config::ANIMATION_DURATION_MS;
use pedal_generator::utils::{
    format_fixed, round_to_hundredths, validate_battery_capacity, validate_duration,
    validate_resistance, validate_rpm, validate_weight,
};
use pedal_generator::{compute, PedalInput};

fn input_from_text(
    rpm: &str,
    duration: &str,
    weight: &str,
    resistance: &str,
    capacity: &str,
) -> PedalInput {
    PedalInput {
        rpm: validate_rpm(rpm).unwrap(),
        duration_sec: validate_duration(duration).unwrap(),
        weight_kg: validate_weight(weight).unwrap(),
        resistance: validate_resistance(resistance).unwrap(),
        battery_capacity_wh: validate_battery_capacity(capacity).unwrap(),
    }
}

#[test]
fn default_form_renders_expected_cards() {
    let input = input_from_text("120", "10:00", "75", "5", "50");
    assert_eq!(input, PedalInput::default());

    let m = compute(&input);
    assert_eq!(format_fixed(m.wh, 2), "23.04");
    assert_eq!(format_fixed(m.work_j, 0), "82938");
    assert_eq!(format_fixed(m.battery_pct, 1), "46.1");
    assert!((m.kcal - 81.25).abs() < 1e-9);
    assert_eq!(format_fixed(m.avg_power_w, 1), "138.2");
    assert_eq!(format_fixed(m.met_value, 1), "6.5");
}

#[test]
fn duration_shorthands_give_identical_metrics() {
    let a = compute(&input_from_text("90", "600", "70", "3", "20"));
    let b = compute(&input_from_text("90", "10m", "70", "3", "20"));
    let c = compute(&input_from_text("90", "0:10:00", "70", "3", "20"));
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn tiny_battery_is_full_after_a_long_hard_session() {
    let m = compute(&input_from_text("200", "10:00:00", "200", "10", "1"));
    assert_eq!(m.battery_pct, 100.0);
}

#[test]
fn heaviest_resistance_and_lightest_rider() {
    let light = compute(&input_from_text("60", "1:00:00", "30", "1", "100"));
    let heavy = compute(&input_from_text("60", "1:00:00", "30", "10", "100"));
    assert_eq!(light.torque_nm, 3.0);
    assert_eq!(heavy.torque_nm, 21.0);
    assert!(heavy.kcal > light.kcal);
    assert!((heavy.kcal - 300.0).abs() < 1e-9);
}

#[test]
fn animated_counter_settles_on_the_rounded_metric() {
    let m = compute(&PedalInput::default());
    let mut tween = Tween::settled(0.0);
    tween.retarget(m.wh, 0.0);
    let halfway = round_to_hundredths(tween.value_at(ANIMATION_DURATION_MS / 2.0));
    assert!(halfway > 0.0 && halfway < round_to_hundredths(m.wh));
    let settled = round_to_hundredths(tween.value_at(ANIMATION_DURATION_MS));
    assert_eq!(settled, 23.04);
}
