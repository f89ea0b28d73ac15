//! End-to-end scenarios for the log-option payoff.
//!
//! Each test drives the public API the same way the chart pipeline does:
//! generate a grid, evaluate a rule over it, inspect the result.

use std::f64::consts::E;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use payoff_core::math::domain::{generate_domain, Endpoint};
use payoff_core::payoff::{evaluate, EvaluationRule, LogOptionPayoff, CONTINUITY_TOLERANCE};
use payoff_core::types::PayoffError;

#[test]
fn test_linear_leg_scenario() {
    let xs = generate_domain(0.0, E, 200, Endpoint::Excluded).unwrap();
    let ys = evaluate(&EvaluationRule::inverse_e_linear(), &xs).unwrap();

    assert_eq!(ys.len(), 200);
    assert_eq!(ys[0], 0.0);
    assert_relative_eq!(ys[199], (E * 199.0 / 200.0) / E, epsilon = 1e-12);
    assert_relative_eq!(ys[199], 0.995, epsilon = 1e-12);
}

#[test]
fn test_log_at_e_scenario() {
    let ys = evaluate(&EvaluationRule::NaturalLog, &[E]).unwrap();
    assert_abs_diff_eq!(ys[0], 1.0, epsilon = CONTINUITY_TOLERANCE);
}

#[test]
fn test_zero_leg_scenario() {
    let xs = generate_domain(-20.0, 0.0, 400, Endpoint::Included).unwrap();
    let ys = evaluate(&EvaluationRule::Zero, &xs).unwrap();

    assert_eq!(ys.len(), 400);
    assert!(ys.iter().all(|&y| y == 0.0));
}

#[test]
fn test_linear_leg_non_negative_and_strictly_increasing() {
    let sets = LogOptionPayoff::default().sample().unwrap();
    let linear = &sets[1];

    assert!(linear.ys().iter().all(|&y| y >= 0.0));
    for pair in linear.ys().windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for (x, y) in linear.points() {
        assert!((0.0..E).contains(&x));
        assert_relative_eq!(y, x / E, epsilon = 1e-15);
    }
}

#[test]
fn test_log_leg_strictly_increasing_from_one() {
    let sets = LogOptionPayoff::default().sample().unwrap();
    let log = &sets[2];

    assert_abs_diff_eq!(log.ys()[0], 1.0, epsilon = CONTINUITY_TOLERANCE);
    for pair in log.ys().windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for (x, y) in log.points() {
        assert!(x >= E);
        assert_eq!(y, x.ln());
    }
}

#[test]
fn test_zero_leg_below_strike() {
    let sets = LogOptionPayoff::default().sample().unwrap();
    for (x, y) in sets[0].points() {
        assert!(x <= 0.0);
        assert_eq!(y, 0.0);
    }
}

#[test]
fn test_continuity_at_kink_within_tolerance() {
    let linear_limit = EvaluationRule::inverse_e_linear().apply(E).unwrap();
    let log_value = EvaluationRule::NaturalLog.apply(E).unwrap();
    assert_abs_diff_eq!(linear_limit, log_value, epsilon = CONTINUITY_TOLERANCE);
}

#[test]
fn test_domain_generation_is_idempotent() {
    let first = generate_domain(E, 20.0, 300, Endpoint::Included).unwrap();
    let second = generate_domain(E, 20.0, 300, Endpoint::Included).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_log_rule_guarded_outside_domain() {
    let xs = generate_domain(-1.0, 1.0, 5, Endpoint::Included).unwrap();
    let result = evaluate(&EvaluationRule::NaturalLog, &xs);
    assert_eq!(result, Err(PayoffError::LogDomain { x: -1.0 }));
}
