// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_in_range() {
    for f in [DOT_SMOOTHING, RING_SMOOTHING, TILT_SMOOTHING] {
        assert!(f > 0.0 && f <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layers_have_the_intended_weight() {
    // dot tracks tightly, ring trails it, tilt is heaviest
    assert!(DOT_SMOOTHING > RING_SMOOTHING);
    assert!(RING_SMOOTHING > TILT_SMOOTHING);
    // yaw swings wider than pitch
    assert!(TILT_MAX_ROTATE_Y_DEG > TILT_MAX_ROTATE_X_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_stays_inside_its_container() {
    assert!(GLOW_CENTER_PERCENT - GLOW_SPAN_PERCENT >= 0.0);
    assert!(GLOW_CENTER_PERCENT + GLOW_SPAN_PERCENT <= 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    for t in [REVEAL_THRESHOLD, COUNTER_THRESHOLD, RING_THRESHOLD] {
        assert!(t > 0.0 && t <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(LOADER_HIDE_DELAY_MS > 0);
    assert!(HERO_REVEAL_STAGGER_MS > 0);
    assert!(PRODUCT_ENTRY_DELAY_MS > 0);
    assert!(PRODUCT_ENTRY_SETTLE_MS > 0);
    assert!(COUNTER_DURATION_MS > 0.0);
}

#[test]
fn ring_circumference_matches_radius() {
    let r = 54.0;
    assert!((RING_CIRCUMFERENCE - 2.0 * std::f64::consts::PI * r).abs() < 0.01);
}
