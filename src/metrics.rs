//! Energy, battery and calorie formulas for the pedal generator.
//!
//! The model is deliberately lumped: a torque that ramps linearly with the
//! resistance level, rotational work `W = τ·θ` with `θ = rotations · 2π`, and a
//! MET-based calorie estimate that is linear in resistance and body weight.
//! [`compute`] is total over its numeric domain and has no side effects; range
//! checks belong to the caller (see [`PedalInput::validate`]).

use crate::config::{
    DEFAULT_BATTERY_CAPACITY_WH, DEFAULT_DURATION_SEC, DEFAULT_RESISTANCE, DEFAULT_RPM,
    DEFAULT_WEIGHT_KG, MAX_DURATION_SEC, MAX_RESISTANCE, MAX_RPM, MAX_WEIGHT_KG,
    MIN_BATTERY_CAPACITY_WH, MIN_DURATION_SEC, MIN_RESISTANCE, MIN_RPM, MIN_WEIGHT_KG,
};
use crate::utils::{ensure_finite, InputError};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

const JOULES_PER_WH: f64 = 3600.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const BASE_TORQUE_NM: f64 = 3.0;
const TORQUE_STEP_NM: f64 = 2.0;
const BASE_MET: f64 = 3.0;
const MET_PER_LEVEL: f64 = 0.7;

/// User-controlled parameters of a pedaling session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalInput {
    pub rpm: f64,
    pub duration_sec: f64,
    pub weight_kg: f64,
    pub resistance: u8,
    pub battery_capacity_wh: f64,
}

impl Default for PedalInput {
    fn default() -> Self {
        Self {
            rpm: DEFAULT_RPM,
            duration_sec: DEFAULT_DURATION_SEC,
            weight_kg: DEFAULT_WEIGHT_KG,
            resistance: DEFAULT_RESISTANCE,
            battery_capacity_wh: DEFAULT_BATTERY_CAPACITY_WH,
        }
    }
}

impl PedalInput {
    /// Check every field against the form bounds.
    ///
    /// [`compute`] does not need this to stay finite for positive durations and
    /// capacities; it exists for callers that receive values from outside the
    /// form, such as [`crate::compute_metrics_js`].
    pub fn validate(&self) -> Result<(), InputError> {
        in_bounds(self.rpm, MIN_RPM, Some(MAX_RPM), "Pedal cadence")?;
        in_bounds(self.duration_sec, MIN_DURATION_SEC, Some(MAX_DURATION_SEC), "Duration")?;
        in_bounds(self.weight_kg, MIN_WEIGHT_KG, Some(MAX_WEIGHT_KG), "Weight")?;
        in_bounds(
            self.battery_capacity_wh,
            MIN_BATTERY_CAPACITY_WH,
            None,
            "Battery capacity",
        )?;
        if self.resistance < MIN_RESISTANCE {
            return Err(InputError::BelowMin {
                field: "Resistance",
                min: MIN_RESISTANCE.to_string(),
            });
        }
        if self.resistance > MAX_RESISTANCE {
            return Err(InputError::AboveMax {
                field: "Resistance",
                max: MAX_RESISTANCE.to_string(),
            });
        }
        Ok(())
    }
}

fn in_bounds(
    value: f64,
    min: f64,
    max: Option<f64>,
    field: &'static str,
) -> Result<(), InputError> {
    ensure_finite(value, field)?;
    if value < min {
        return Err(InputError::BelowMin {
            field,
            min: min.to_string(),
        });
    }
    match max {
        Some(max) if value > max => Err(InputError::AboveMax {
            field,
            max: max.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Quantities derived from a [`PedalInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub rotations: f64,
    pub torque_nm: f64,
    pub work_j: f64,
    pub wh: f64,
    pub avg_power_w: f64,
    pub battery_pct: f64,
    pub met_value: f64,
    pub kcal: f64,
}

/// Whole crank rotations completed at `rpm` over `duration_sec`.
pub fn rotations(rpm: f64, duration_sec: f64) -> f64 {
    (rpm * duration_sec / 60.0).round()
}

/// Crank torque for a resistance level: 3 N·m at level 1, +2 N·m per level.
pub fn torque_nm(resistance: u8) -> f64 {
    BASE_TORQUE_NM + TORQUE_STEP_NM * (f64::from(resistance) - 1.0)
}

/// Metabolic equivalent for a resistance level (3.7 at level 1, 10.0 at level 10).
pub fn met_value(resistance: u8) -> f64 {
    BASE_MET + MET_PER_LEVEL * f64::from(resistance)
}

/// Share of `capacity_wh` restored by `wh`, clamped to `0..=100`.
///
/// A capacity that is not a positive finite number restores nothing.
pub fn battery_percent(wh: f64, capacity_wh: f64) -> f64 {
    if !(capacity_wh.is_finite() && capacity_wh > 0.0) {
        return 0.0;
    }
    (wh / capacity_wh * 100.0).clamp(0.0, 100.0)
}

/// Evaluate every formula for one input.
pub fn compute(input: &PedalInput) -> Metrics {
    let rotations = rotations(input.rpm, input.duration_sec);
    let torque_nm = torque_nm(input.resistance);
    let work_j = rotations * torque_nm * TAU;
    let wh = work_j / JOULES_PER_WH;
    let avg_power_w = if input.duration_sec > 0.0 {
        work_j / input.duration_sec
    } else {
        0.0
    };
    let battery_pct = battery_percent(wh, input.battery_capacity_wh);
    let met_value = met_value(input.resistance);
    let kcal = met_value * input.weight_kg * (input.duration_sec / SECONDS_PER_HOUR);

    Metrics {
        rotations,
        torque_nm,
        work_j,
        wh,
        avg_power_w,
        battery_pct,
        met_value,
        kcal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, tol: f64) -> bool {
        (actual - expected).abs() <= tol
    }

    #[test]
    fn torque_is_linear_over_all_levels() {
        for r in MIN_RESISTANCE..=MAX_RESISTANCE {
            let t = torque_nm(r);
            assert_eq!(t, 2.0 * f64::from(r) + 1.0);
            assert!((3.0..=21.0).contains(&t));
        }
    }

    #[test]
    fn default_session_matches_hand_calculation() {
        let m = compute(&PedalInput::default());
        assert_eq!(m.rotations, 1200.0);
        assert_eq!(m.torque_nm, 11.0);
        assert!(close(m.work_j, 82_938.046, 0.01), "work {}", m.work_j);
        assert!(close(m.wh, 23.038, 0.001), "wh {}", m.wh);
        assert!(close(m.avg_power_w, 138.230, 0.001), "power {}", m.avg_power_w);
        assert!(close(m.battery_pct, 46.077, 0.001), "pct {}", m.battery_pct);
        assert!(close(m.met_value, 6.5, 1e-12));
        assert!(close(m.kcal, 81.25, 1e-9), "kcal {}", m.kcal);
    }

    #[test]
    fn zero_duration_produces_no_power_and_no_energy() {
        let input = PedalInput {
            duration_sec: 0.0,
            ..PedalInput::default()
        };
        let m = compute(&input);
        assert_eq!(m.avg_power_w, 0.0);
        assert_eq!(m.kcal, 0.0);
        assert_eq!(m.rotations, 0.0);
        assert_eq!(m.wh, 0.0);
        assert_eq!(m.battery_pct, 0.0);
    }

    #[test]
    fn battery_saturates_at_exactly_one_hundred() {
        let input = PedalInput {
            rpm: 200.0,
            duration_sec: 36_000.0,
            resistance: 10,
            battery_capacity_wh: 1.0,
            ..PedalInput::default()
        };
        let m = compute(&input);
        assert!(m.wh > 1.0);
        assert_eq!(m.battery_pct, 100.0);
    }

    #[test]
    fn battery_percent_is_bounded_for_degenerate_capacity() {
        assert_eq!(battery_percent(10.0, 0.0), 0.0);
        assert_eq!(battery_percent(10.0, -5.0), 0.0);
        assert_eq!(battery_percent(10.0, f64::NAN), 0.0);
        assert_eq!(battery_percent(0.0, 50.0), 0.0);
        assert_eq!(battery_percent(25.0, 50.0), 50.0);
    }

    #[test]
    fn resistance_boundaries() {
        assert_eq!(torque_nm(1), 3.0);
        assert!(close(met_value(1), 3.7, 1e-12));
        assert_eq!(torque_nm(10), 21.0);
        assert!(close(met_value(10), 10.0, 1e-12));
    }

    #[test]
    fn rotations_round_to_nearest_whole_turn() {
        assert_eq!(rotations(90.0, 1.0), 2.0); // 1.5 rounds up
        assert_eq!(rotations(60.0, 1.0), 1.0);
        assert_eq!(rotations(1.0, 1.0), 0.0);
    }

    #[test]
    fn compute_is_deterministic() {
        let input = PedalInput {
            rpm: 87.3,
            duration_sec: 1234.5,
            weight_kg: 68.2,
            resistance: 7,
            battery_capacity_wh: 12.5,
        };
        let a = compute(&input);
        let b = compute(&input);
        assert_eq!(a.work_j.to_bits(), b.work_j.to_bits());
        assert_eq!(a.kcal.to_bits(), b.kcal.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn outputs_are_finite_across_the_form_bounds() {
        for rpm in [MIN_RPM, 60.0, MAX_RPM] {
            for duration_sec in [MIN_DURATION_SEC, 600.0, MAX_DURATION_SEC] {
                for weight_kg in [MIN_WEIGHT_KG, MAX_WEIGHT_KG] {
                    for resistance in [MIN_RESISTANCE, MAX_RESISTANCE] {
                        for battery_capacity_wh in [MIN_BATTERY_CAPACITY_WH, 1_000.0] {
                            let input = PedalInput {
                                rpm,
                                duration_sec,
                                weight_kg,
                                resistance,
                                battery_capacity_wh,
                            };
                            assert!(input.validate().is_ok());
                            let m = compute(&input);
                            for v in [m.work_j, m.wh, m.avg_power_w, m.battery_pct, m.kcal] {
                                assert!(v.is_finite());
                            }
                            assert!((0.0..=100.0).contains(&m.battery_pct));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn validate_rejects_out_of_bounds_fields() {
        let bad_rpm = PedalInput {
            rpm: 0.0,
            ..PedalInput::default()
        };
        assert!(matches!(
            bad_rpm.validate(),
            Err(InputError::BelowMin { field: "Pedal cadence", .. })
        ));

        let bad_weight = PedalInput {
            weight_kg: f64::INFINITY,
            ..PedalInput::default()
        };
        assert_eq!(bad_weight.validate(), Err(InputError::NonFinite("Weight")));

        let huge_duration = PedalInput {
            rpm: MAX_RPM,
            resistance: MAX_RESISTANCE,
            duration_sec: 1e306,
            ..PedalInput::default()
        };
        assert!(matches!(
            huge_duration.validate(),
            Err(InputError::AboveMax { field: "Duration", .. })
        ));

        let bad_resistance = PedalInput {
            resistance: 11,
            ..PedalInput::default()
        };
        assert!(matches!(
            bad_resistance.validate(),
            Err(InputError::AboveMax { field: "Resistance", .. })
        ));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(compute(&PedalInput::default())).unwrap();
        assert!(json.get("avgPowerW").is_some());
        assert!(json.get("batteryPct").is_some());

        let input: PedalInput = serde_json::from_str(
            r#"{"rpm":90,"durationSec":60,"weightKg":70,"resistance":3,"batteryCapacityWh":10}"#,
        )
        .unwrap();
        assert_eq!(input.resistance, 3);
        assert_eq!(input.duration_sec, 60.0);
    }
}
