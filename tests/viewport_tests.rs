// Host-side tests for canvas sizing and the shader clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod viewport {
    include!("../src/core/viewport.rs");
}
mod clock {
    include!("../src/core/clock.rs");
}

use clock::ShaderClock;
use viewport::*;

#[test]
fn backing_size_scales_with_device_pixel_ratio() {
    assert_eq!(
        backing_size(800.0, 600.0, 1.0),
        BackingSize {
            width: 800,
            height: 600
        }
    );
    assert_eq!(
        backing_size(800.0, 600.0, 2.0),
        BackingSize {
            width: 1600,
            height: 1200
        }
    );
}

#[test]
fn backing_size_floors_fractional_pixels() {
    let size = backing_size(1024.5, 767.0, 1.5);
    assert_eq!(size.width, 1536);
    assert_eq!(size.height, 1150);
}

#[test]
fn backing_size_treats_bad_ratio_as_one() {
    let expected = BackingSize {
        width: 640,
        height: 480,
    };
    assert_eq!(backing_size(640.0, 480.0, 0.0), expected);
    assert_eq!(backing_size(640.0, 480.0, f64::NAN), expected);
    assert_eq!(backing_size(640.0, 480.0, -2.0), expected);
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(
        backing_size(0.0, 0.0, 2.0),
        BackingSize {
            width: 1,
            height: 1
        }
    );
}

#[test]
fn resize_keeps_proportions() {
    for &dpr in &[1.0, 1.25, 2.0, 3.0] {
        let a = backing_size(400.0, 300.0, dpr);
        let b = backing_size(800.0, 600.0, dpr);
        assert_eq!(b.width, a.width * 2, "dpr={}", dpr);
        assert_eq!(b.height, a.height * 2, "dpr={}", dpr);
    }
}

#[test]
fn clock_accumulates_frame_deltas() {
    let mut clock = ShaderClock::default();
    assert_eq!(clock.elapsed(), 0.0);
    clock.advance(0.016);
    clock.advance(0.017);
    let t = clock.advance(0.017);
    assert!((t - 0.05).abs() < 1e-6, "t={}", t);
    assert_eq!(t, clock.elapsed());
}

#[test]
fn clock_ignores_bogus_deltas() {
    let mut clock = ShaderClock::default();
    clock.advance(1.0);
    clock.advance(-0.5);
    clock.advance(f32::NAN);
    clock.advance(f32::INFINITY);
    assert_eq!(clock.elapsed(), 1.0);
}
