// File: crates/chart-core/tests/ticks.rs
// Purpose: Nice tick selection, zero-baseline families and forced bounds.

use vitals_chart_core::axis::{nice_step, round6, MAX_TICKS};
use vitals_chart_core::{generate_ticks, nice_ticks, ChartFamily, TickSpec};

#[test]
fn step_near_nine_resolves_to_ten() {
    assert_eq!(nice_step(9.4), 10.0);
    assert_eq!(nice_ticks(0.0, 47.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
}

#[test]
fn step_picks_closest_candidate() {
    assert_eq!(nice_step(3.0), 2.0);
    assert_eq!(nice_step(4.0), 5.0);
    assert!((nice_step(130.0) - 100.0).abs() < 1e-9);
    assert!((nice_step(0.034) - 0.02).abs() < 1e-12);
}

#[test]
fn degenerate_range_yields_unit_ticks() {
    assert_eq!(nice_ticks(5.0, 5.0, 5), vec![0.0, 1.0]);
    assert_eq!(nice_ticks(9.0, 3.0, 5), vec![0.0, 1.0]);
    assert_eq!(nice_ticks(f64::NAN, 3.0, 5), vec![0.0, 1.0]);
}

#[test]
fn fractional_ticks_are_rounded() {
    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
}

#[test]
fn negative_ranges() {
    assert_eq!(nice_ticks(-13.0, 27.0, 4), vec![-20.0, -10.0, 0.0, 10.0, 20.0, 30.0]);
}

#[test]
fn bar_family_pins_zero() {
    let spec = TickSpec::default().family(ChartFamily::Bar);
    assert_eq!(generate_ticks(20.0, 47.0, &spec), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
    let line = nice_ticks(20.0, 47.0, 5);
    assert_eq!(line.first().copied(), Some(20.0));
}

#[test]
fn forced_bounds_become_first_and_last_ticks() {
    let spec = TickSpec::default().forced(Some(5.0), Some(45.0));
    assert_eq!(generate_ticks(0.0, 47.0, &spec), vec![5.0, 10.0, 20.0, 30.0, 40.0, 45.0]);
}

#[test]
fn forced_bounds_on_step_multiples_are_not_duplicated() {
    let spec = TickSpec::default().forced(Some(0.0), Some(50.0));
    assert_eq!(generate_ticks(0.0, 47.0, &spec), vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
}

#[test]
fn forced_max_may_cut_off_data() {
    let spec = TickSpec::default().forced(None, Some(50.0));
    assert_eq!(generate_ticks(0.0, 100.0, &spec), vec![0.0, 20.0, 40.0, 50.0]);
}

#[test]
fn forced_min_alone() {
    let spec = TickSpec::default().forced(Some(3.0), None);
    assert_eq!(generate_ticks(0.0, 47.0, &spec), vec![3.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
}

#[test]
fn zero_tick_count_is_treated_as_one() {
    let ticks = nice_ticks(0.0, 10.0, 0);
    assert_eq!(ticks, vec![0.0, 10.0]);
}

#[test]
fn round6_folds_noise_and_negative_zero() {
    assert_eq!(round6(0.30000000000000004), 0.3);
    assert!(round6(-0.0000001).is_sign_positive());
}

#[test]
fn wide_forced_range_coarsens_step_instead_of_truncating() {
    // Data spans 0..1 (step 0.2) but the axis is forced to 0..1e6.
    let spec = TickSpec::default().forced(Some(0.0), Some(1_000_000.0));
    let ticks = generate_ticks(0.0, 1.0, &spec);
    assert!(ticks.len() <= MAX_TICKS);
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&1_000_000.0));
    assert_eq!(ticks.len(), 501);
    assert!(ticks.windows(2).all(|w| (w[1] - w[0] - 2_000.0).abs() < 1e-6));
}
