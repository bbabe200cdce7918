// Host-side tests for keyframe tracks.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod track {
    include!("../src/track.rs");
}

use track::{Lerp, Track};

#[test]
fn endpoints_are_exact() {
    let t = Track::new(&[(0.0, 3.0_f32), (0.4, 7.0), (1.0, -2.0)]).unwrap();
    assert_eq!(t.sample(0.0), 3.0);
    assert_eq!(t.sample(1.0), -2.0);
}

#[test]
fn out_of_range_inputs_clamp_instead_of_extrapolating() {
    let t = Track::new(&[(0.0, 1.0_f32), (1.0, 0.0)]).unwrap();
    for x in [-10.0_f32, -0.001, 1.001, 2.0, 1e6] {
        let clamped = x.clamp(0.0, 1.0);
        assert_eq!(t.sample(x), t.sample(clamped));
    }
    assert_eq!(t.sample(-5.0), 1.0);
    assert_eq!(t.sample(5.0), 0.0);
}

#[test]
fn linear_between_breakpoints() {
    let t = Track::new(&[(0.0, 0.0_f32), (1.0, 200.0)]).unwrap();
    assert!((t.sample(0.25) - 50.0).abs() < 1e-4);
    assert!((t.sample(0.5) - 100.0).abs() < 1e-4);
    assert!((t.sample(0.75) - 150.0).abs() < 1e-4);
}

#[test]
fn fade_in_hold_fade_out_profile() {
    // The shape every content section uses: fade in over the first fifth,
    // hold, fade out over the last fifth.
    let t = Track::new(&[(0.0, 0.0_f32), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)]).unwrap();
    let cases = [
        (0.0, 0.0),
        (0.1, 0.5),
        (0.5, 1.0),
        (0.9, 0.5),
        (1.0, 0.0),
    ];
    for (input, expected) in cases {
        assert!(
            (t.sample(input) - expected).abs() < 1e-5,
            "sample({}) = {}, expected {}",
            input,
            t.sample(input),
            expected
        );
    }
}

#[test]
fn coincident_fractions_hold_the_later_value() {
    let t = Track::new(&[(0.0, 0.0_f32), (0.5, 1.0), (0.5, 5.0), (1.0, 5.0)]).unwrap();
    // No division by zero, and the step lands on the later value.
    assert!((t.sample(0.499) - 0.998).abs() < 1e-3);
    assert_eq!(t.sample(0.5), 5.0);
    assert_eq!(t.sample(0.75), 5.0);
}

#[test]
fn construction_rejects_bad_keyframe_lists() {
    assert!(Track::<f32>::new(&[]).is_err());
    assert!(Track::new(&[(0.0, 1.0_f32)]).is_err());
    assert!(Track::new(&[(0.0, 0.0_f32), (0.8, 1.0), (0.2, 0.0)]).is_err());
    assert!(Track::new(&[(0.0, 0.0_f32), (f32::NAN, 1.0)]).is_err());
}

#[test]
fn vectors_interpolate_component_wise() {
    let t = Track::new(&[
        (0.0, glam::Vec3::new(0.0, 10.0, -4.0)),
        (1.0, glam::Vec3::new(2.0, 0.0, 4.0)),
    ])
    .unwrap();
    let mid = t.sample(0.5);
    assert!((mid - glam::Vec3::new(1.0, 5.0, 0.0)).length() < 1e-5);
}

#[test]
fn scalar_lerp_matches_formula() {
    // v0 + (v1 - v0) * t
    assert_eq!(<f32 as Lerp>::lerp(2.0, 6.0, 0.25), 3.0);
}
