// Host-side tests for settings, tuning constants and bundled shader sources.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use config::*;
use constants::*;

static QUAD_VERT: &str = include_str!("../shaders/quad.vert");
static HEART_FRAG: &str = include_str!("../shaders/heart.frag");

#[test]
fn default_settings_match_stock_page() {
    let s = Settings::default();
    assert_eq!(s.radius, 240.0);
    assert!(s.auto_rotate);
    assert_eq!(s.rotate_speed, -60.0);
    assert_eq!(s.panel_width, 120.0);
    assert_eq!(s.panel_height, 170.0);
    assert_eq!(s.music_url.as_deref(), Some(DEFAULT_MUSIC_URL));
    assert!(s.music_controls);
}

#[test]
fn spin_animation_direction_follows_speed_sign() {
    let s = Settings::default();
    assert_eq!(
        s.spin_animation().as_deref(),
        Some("spinRevert 60s infinite linear")
    );
    let forward = Settings {
        rotate_speed: 30.0,
        ..Settings::default()
    };
    assert_eq!(
        forward.spin_animation().as_deref(),
        Some("spin 30s infinite linear")
    );
}

#[test]
fn spin_animation_off_without_auto_rotate() {
    let s = Settings {
        auto_rotate: false,
        ..Settings::default()
    };
    assert_eq!(s.spin_animation(), None);
}

#[test]
fn ground_is_three_radii_wide() {
    assert_eq!(Settings::default().ground_size(GROUND_RADIUS_FACTOR), 720.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(RADIUS_MIN > 0.0 && RADIUS_MIN < RADIUS_MAX);
    assert!((RADIUS_MIN..=RADIUS_MAX).contains(&Settings::default().radius));
    assert!(TILT_MIN <= INITIAL_TILT && INITIAL_TILT <= TILT_MAX);

    // decay must shrink the residual or inertia would never stop
    assert!(INERTIA_DECAY > 0.0 && INERTIA_DECAY < 1.0);
    assert!(INERTIA_STOP_THRESHOLD > 0.0);
    assert!(INERTIA_TICK_MS > 0);

    assert!(WHEEL_RADIUS_STEP > 0.0);
    assert!(DRAG_SENSITIVITY > 0.0);
    assert!(STAGGER_DIVISOR > 0.0);
}

#[test]
fn shaders_declare_the_expected_inputs() {
    assert!(QUAD_VERT.contains("attribute vec2 position;"));
    for uniform in ["time", "width", "height"] {
        let decl = format!("uniform float {};", uniform);
        assert!(HEART_FRAG.contains(&decl), "missing {}", decl);
    }
}
