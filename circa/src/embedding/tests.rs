use super::*;
use approx::{abs_diff_eq, assert_abs_diff_eq, assert_relative_eq};
use core::f64::consts::{FRAC_PI_2, PI};

fn periods() -> Vec<Period<f64>> {
    vec![
        Period::hours(),
        Period::degrees(),
        Period::radians(),
        Period::new(7.5).unwrap(),
    ]
}

/// Values from well below zero to several cycles above, in steps that are
/// not commensurate with any of the test periods.
fn sample_values(period: Period<f64>) -> Vec<f64> {
    let p = period.length();
    (-40..=80).map(|i| i as f64 * p * 0.0737 - p).collect()
}

/// acos loses precision next to ±1, so distance checks allow a small
/// fraction of the period.
fn tolerance(period: Period<f64>) -> f64 {
    1e-7 * period.length()
}

#[test]
fn embed_has_unit_magnitude() {
    for period in periods() {
        for v in sample_values(period) {
            let point = embed(v, period);
            let norm = (point.x() * point.x() + point.y() * point.y()).sqrt();
            assert!(
                abs_diff_eq!(norm, 1.0, epsilon = 1e-9),
                "|embed({v})| = {norm} for period {}",
                period.length()
            );
        }
    }
}

#[test]
fn embed_is_periodic() {
    for period in periods() {
        for v in sample_values(period) {
            let base = embed(v, period);
            for k in -3..=3 {
                let shifted = embed(v + k as f64 * period.length(), period);
                assert_abs_diff_eq!(base.x(), shifted.x(), epsilon = 1e-9);
                assert_abs_diff_eq!(base.y(), shifted.y(), epsilon = 1e-9);
            }
            let normalized = embed(period.normalize(v), period);
            assert_abs_diff_eq!(base.x(), normalized.x(), epsilon = 1e-9);
            assert_abs_diff_eq!(base.y(), normalized.y(), epsilon = 1e-9);
        }
    }
}

#[test]
fn embed_angle_is_in_half_open_range() {
    for period in periods() {
        for v in sample_values(period) {
            let angle = embed(v, period).angle();
            assert!(angle > -PI && angle <= PI, "angle {angle} out of range");
        }
    }
}

#[test]
fn phase_of_minus_pi_stays_in_half_open_range() {
    let flipped = Embedding::new(Period::<f64>::hours()).with_phase(-PI);
    let midnight = flipped.embed(0.0);
    assert_eq!(midnight.angle(), PI);
    assert_abs_diff_eq!(midnight.x(), -1.0, epsilon = 1e-12);
    let back = flipped.unembed(&midnight);
    assert!(circular_distance(back, 0.0, Period::hours()) < 1e-6);

    let hours = Period::<f64>::hours();
    for i in 0..=2000 {
        let v = 11.9 + i as f64 * 1e-4;
        let angle = embed(v, hours).angle();
        assert!(angle > -PI && angle <= PI, "angle {angle} out of range at {v}");
    }
}

#[test]
fn phase_puts_midnight_at_top() {
    // Screen coordinates: y grows downward, so "top" is (0, -1).
    let clock = Embedding::new(Period::<f64>::hours()).with_phase(-FRAC_PI_2);

    let midnight = clock.embed(0.0);
    assert_abs_diff_eq!(midnight.x(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(midnight.y(), -1.0, epsilon = 1e-12);

    let six = clock.embed(6.0);
    assert_abs_diff_eq!(six.x(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(six.y(), 0.0, epsilon = 1e-12);
}

#[test]
fn unembed_inverts_embed() {
    let clock = Embedding::new(Period::<f64>::hours()).with_phase(-FRAC_PI_2);
    for h in [0.5, 3.25, 11.0, 12.0, 17.75, 23.5] {
        assert_relative_eq!(clock.unembed(&clock.embed(h)), h, epsilon = 1e-9);
    }
    assert_relative_eq!(clock.unembed(&clock.embed(-1.5)), 22.5, epsilon = 1e-9);
}

#[test]
fn value_at_reads_drag_positions() {
    let wheel = Embedding::new(Period::<f64>::degrees()).with_phase(-FRAC_PI_2);
    assert_abs_diff_eq!(wheel.value_at(0.0, -179.0).unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(wheel.value_at(179.0, 0.0).unwrap(), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(wheel.value_at(0.0, 50.0).unwrap(), 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(wheel.value_at(-2.0, 0.0).unwrap(), 270.0, epsilon = 1e-9);
    assert!(wheel.value_at(0.0, 0.0).is_none());
}

#[test]
fn distance_to_self_is_zero() {
    for period in periods() {
        for v in sample_values(period) {
            let d = circular_distance(v, v, period);
            assert!(d >= 0.0 && d < tolerance(period), "d({v}, {v}) = {d}");
        }
    }
}

#[test]
fn distance_is_symmetric_and_bounded() {
    for period in periods() {
        let values = sample_values(period);
        for &a in values.iter().step_by(3) {
            for &b in values.iter().step_by(5) {
                let ab = circular_distance(a, b, period);
                let ba = circular_distance(b, a, period);
                assert_abs_diff_eq!(ab, ba, epsilon = 1e-12);
                assert!(ab >= 0.0);
                assert!(ab <= period.half() + 1e-12, "d({a}, {b}) = {ab}");
            }
        }
    }
}

#[test]
fn distance_matches_signed_delta_magnitude() {
    for period in periods() {
        let values = sample_values(period);
        for &a in values.iter().step_by(4) {
            for &b in values.iter().step_by(7) {
                let d = circular_distance(a, b, period);
                let delta = shortest_signed_delta(a, b, period);
                assert_abs_diff_eq!(d, delta.abs(), epsilon = tolerance(period));
            }
        }
    }
}

#[test]
fn antipodal_distance_is_half_period() {
    for period in periods() {
        for v in sample_values(period) {
            let d = circular_distance(v, v + period.half(), period);
            assert_abs_diff_eq!(d, period.half(), epsilon = tolerance(period));
        }
    }
}

#[test]
fn distance_wraps_through_midnight() {
    let hours = Period::<f64>::hours();
    assert_relative_eq!(circular_distance(23.0, 1.0, hours), 2.0, epsilon = 1e-9);
    assert_relative_eq!(circular_distance(1.0, 23.0, hours), 2.0, epsilon = 1e-9);
    assert_relative_eq!(circular_distance(0.5, 10.0, hours), 9.5, epsilon = 1e-9);
    assert_relative_eq!(circular_distance(-1.0, 25.0, hours), 2.0, epsilon = 1e-9);
}

#[test]
fn signed_delta_examples() {
    let degrees = Period::<f64>::degrees();
    assert_relative_eq!(shortest_signed_delta(350.0, 10.0, degrees), 20.0, epsilon = 1e-12);
    assert_relative_eq!(shortest_signed_delta(10.0, 350.0, degrees), -20.0, epsilon = 1e-12);
    assert_relative_eq!(shortest_signed_delta(0.0, 180.0, degrees), -180.0);
    assert_relative_eq!(shortest_signed_delta(180.0, 0.0, degrees), -180.0);
    assert_eq!(shortest_signed_delta(42.0, 42.0, degrees), 0.0);
}

#[test]
fn signed_delta_matches_modulo_formula() {
    for period in periods() {
        let p = period.length();
        let values = sample_values(period);
        for &a in values.iter().step_by(3) {
            for &b in values.iter().step_by(4) {
                let expected = (b - a + 1.5 * p).rem_euclid(p) - 0.5 * p;
                let delta = shortest_signed_delta(a, b, period);
                assert!(delta >= -period.half() && delta < period.half());
                assert_abs_diff_eq!(delta, expected, epsilon = 1e-9 * p.max(1.0));
            }
        }
    }
}

#[test]
fn mean_across_zero_is_zero_not_one_eighty() {
    let degrees = Period::<f64>::degrees();
    let result = circular_mean(&[350.0, 10.0], degrees).unwrap();
    assert!(!result.degenerate);
    assert!(circular_distance(result.mean, 0.0, degrees) < 1e-4);
    assert!(result.mean >= 0.0 && result.mean < 360.0);
    assert_relative_eq!(result.resultant_length, 10.0_f64.to_radians().cos(), epsilon = 1e-12);
}

#[test]
fn mean_of_longitudes_across_the_dateline() {
    let degrees = Period::<f64>::degrees();
    let result = circular_mean(&[175.0, -178.0], degrees).unwrap();
    assert_relative_eq!(result.mean, 178.5, epsilon = 1e-9);
}

#[test]
fn mean_of_single_value() {
    let hours = Period::<f64>::hours();
    let result = circular_mean(&[-2.0], hours).unwrap();
    assert_relative_eq!(result.mean, 22.0, epsilon = 1e-9);
    assert_relative_eq!(result.resultant_length, 1.0, epsilon = 1e-12);
    assert!(!result.degenerate);
}

#[test]
fn mean_of_empty_input_is_an_error() {
    let result = circular_mean::<f64>(&[], Period::hours());
    assert!(matches!(result, Err(CircularError::EmptyInput)));
}

#[test]
fn opposed_values_give_degenerate_mean() {
    let degrees = Period::<f64>::degrees();

    let opposed = circular_mean(&[90.0, 270.0 + 360.0], degrees).unwrap();
    assert!(opposed.degenerate);
    assert_relative_eq!(opposed.mean, 90.0);
    assert!(opposed.resultant_length < 1e-8);

    let spread = circular_mean(&[-360.0, 90.0, 180.0, 270.0], degrees).unwrap();
    assert!(spread.degenerate);
    assert_eq!(spread.mean, 0.0);
}

#[test]
fn custom_tolerance_flags_weak_concentration() {
    let hours = Period::<f64>::hours();
    let values = [0.0, 8.0, 15.0];
    let loose = circular_mean_with_tolerance(&values, hours, 0.5).unwrap();
    assert!(loose.degenerate);
    let strict = circular_mean(&values, hours).unwrap();
    assert!(!strict.degenerate);
    assert!(strict.resultant_length < 0.5);
}

#[test]
fn resultant_length_orders_by_concentration() {
    let hours = Period::<f64>::hours();
    let tight = circular_mean(&[23.5, 0.0, 0.5], hours).unwrap();
    let loose = circular_mean(&[20.0, 0.0, 4.0], hours).unwrap();
    assert!(tight.resultant_length > loose.resultant_length);
    assert!(tight.resultant_length <= 1.0);
    assert!(circular_distance(tight.mean, 0.0, hours) < 1e-5);
    assert!(circular_distance(loose.mean, 0.0, hours) < 1e-5);
}

#[test]
fn midpoint_agrees_with_two_value_mean() {
    for period in periods() {
        let values = sample_values(period);
        for &a in values.iter().step_by(3) {
            for &b in values.iter().step_by(5) {
                let delta = shortest_signed_delta(a, b, period);
                if delta.abs() > 0.49 * period.length() {
                    continue;
                }
                let mid = shortest_midpoint(a, b, period);
                let mean = circular_mean(&[a, b], period).unwrap();
                assert!(!mean.degenerate);
                assert!(
                    circular_distance(mid, mean.mean, period) < tolerance(period),
                    "midpoint {mid} vs mean {} for ({a}, {b})",
                    mean.mean
                );
            }
        }
    }
}

#[test]
fn midpoint_examples() {
    let degrees = Period::<f64>::degrees();
    assert_relative_eq!(shortest_midpoint(340.0, 40.0, degrees), 10.0, epsilon = 1e-9);
    assert_relative_eq!(shortest_midpoint(40.0, 340.0, degrees), 10.0, epsilon = 1e-9);
    assert_relative_eq!(shortest_midpoint(350.0, 10.0, degrees), 0.0, epsilon = 1e-9);
    assert_relative_eq!(shortest_midpoint(100.0, 120.0, degrees), 110.0, epsilon = 1e-9);
}

#[test]
fn interpolation_endpoints() {
    let hours = Period::<f64>::hours();
    assert_relative_eq!(interpolate(22.0, 2.0, 0.0, hours), 22.0);
    assert_relative_eq!(interpolate(22.0, 2.0, 1.0, hours), 2.0, epsilon = 1e-12);
    assert_relative_eq!(interpolate(22.0, 2.0, 0.25, hours), 23.0, epsilon = 1e-12);
}

#[test]
fn arc_samples_pass_through_red() {
    let degrees = Period::<f64>::degrees();
    let samples = sample_arc(340.0, 40.0, 6, degrees);
    let expected = [340.0, 350.0, 0.0, 10.0, 20.0, 30.0, 40.0];
    assert_eq!(samples.len(), expected.len());
    for (got, want) in samples.iter().zip(expected.iter()) {
        assert!(
            circular_distance(*got, *want, degrees) < 1e-4,
            "sample {got} expected {want}"
        );
        assert!(*got >= 0.0 && *got < 360.0);
    }
}

#[test]
fn arc_sweep_direction() {
    let hours = Period::<f64>::hours();

    let forward = ArcSweep::between(23.0, 1.0, hours);
    assert_relative_eq!(forward.span, 2.0, epsilon = 1e-12);
    assert!(forward.positive);
    assert!(!forward.large_arc);

    let backward = ArcSweep::between(1.0, 23.0, hours);
    assert!(!backward.positive);
    assert!(!backward.large_arc);

    let explicit = ArcSweep::from_delta(20.0, hours);
    assert!(explicit.large_arc);
    assert!(explicit.positive);
}

#[test]
fn angular_steps_unwrap_the_sequence() {
    let degrees = Period::<f64>::degrees();
    let steps = angular_steps(&[350.0, 10.0, 30.0, 340.0], degrees);
    assert_eq!(steps.len(), 3);
    assert_relative_eq!(steps[0], 20.0, epsilon = 1e-12);
    assert_relative_eq!(steps[1], 20.0, epsilon = 1e-12);
    assert_relative_eq!(steps[2], -50.0, epsilon = 1e-12);

    assert!(angular_steps(&[5.0], degrees).is_empty());
    assert!(angular_steps::<f64>(&[], degrees).is_empty());
}

#[test]
fn single_precision_mean() {
    let degrees = Period::<f32>::degrees();
    let result = circular_mean(&[350.0_f32, 10.0], degrees).unwrap();
    assert!(!result.degenerate);
    assert!(circular_distance(result.mean, 0.0, degrees) < 0.1);

    let opposed = circular_mean(&[0.0_f32, 180.0], degrees).unwrap();
    assert!(opposed.degenerate);
}

#[test]
fn nearest_index_picks_the_closer_handle() {
    let degrees = Period::<f64>::degrees();
    assert_eq!(nearest_index(20.0, &[340.0, 40.0], degrees).unwrap(), 1);
    assert_eq!(nearest_index(350.0, &[340.0, 40.0], degrees).unwrap(), 0);
    assert_eq!(nearest_index(180.0, &[340.0, 40.0], degrees).unwrap(), 1);
    assert!(matches!(
        nearest_index::<f64>(0.0, &[], degrees),
        Err(CircularError::EmptyInput)
    ));
}
