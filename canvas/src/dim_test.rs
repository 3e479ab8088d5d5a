#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn opacity_is_level_over_hundred_for_whole_range() {
    for level in 0..=100 {
        let opacity = overlay_opacity(level);
        assert_eq!(opacity, f64::from(level) / 100.0);
        assert!((0.0..=1.0).contains(&opacity), "level {level} -> {opacity}");
    }
}

#[test]
fn opacity_endpoints() {
    assert_eq!(overlay_opacity(0), 0.0);
    assert_eq!(overlay_opacity(100), 1.0);
}

#[test]
fn opacity_out_of_range_is_not_clamped() {
    assert!(overlay_opacity(150) > 1.0);
}

#[test]
fn clamp_dim_level_bounds() {
    assert_eq!(clamp_dim_level(-5), 0);
    assert_eq!(clamp_dim_level(0), 0);
    assert_eq!(clamp_dim_level(42), 42);
    assert_eq!(clamp_dim_level(100), 100);
    assert_eq!(clamp_dim_level(9_999), 100);
}

#[test]
fn opacity_css_two_decimals() {
    assert_eq!(opacity_css(overlay_opacity(30)), "0.30");
    assert_eq!(opacity_css(overlay_opacity(100)), "1.00");
}
