// Host-side tests for the per-section motion table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod track {
    include!("../src/track.rs");
}
mod progress {
    include!("../src/progress.rs");
}
mod motion {
    include!("../src/motion.rs");
}

use motion::{portfolio_motions, DriftUnit};
use progress::SpanAnchors;

#[test]
fn table_covers_the_animated_sections() {
    let motions = portfolio_motions().unwrap();
    let ids: Vec<&str> = motions.iter().map(|m| m.id).collect();
    assert_eq!(ids, ["home", "about", "projects", "experience"]);
    // Only the hero animates over the page's own scroll; everything else
    // fades through its viewport transit.
    for m in &motions {
        let expected = if m.id == "home" {
            SpanAnchors::TopToExit
        } else {
            SpanAnchors::EnterToExit
        };
        assert_eq!(m.anchors, expected, "section {}", m.id);
    }
}

#[test]
fn hero_shrinks_and_sinks_while_fading() {
    let motions = portfolio_motions().unwrap();
    let hero = &motions[0];

    let start = hero.sample(0.0);
    assert_eq!(start.opacity, 1.0);
    assert_eq!(start.drift, 0.0);
    assert_eq!(start.zoom, Some(1.0));

    // Opacity is gone halfway down; drift and zoom keep going.
    let mid = hero.sample(0.5);
    assert!(mid.opacity.abs() < 1e-6);
    assert!((mid.drift - 100.0).abs() < 1e-4);
    assert!((mid.zoom.unwrap() - 0.9).abs() < 1e-5);

    let end = hero.sample(1.0);
    assert_eq!(end.drift, 200.0);
    assert_eq!(end.zoom, Some(0.8));
    assert_eq!(hero.drift_unit, DriftUnit::Px);
}

#[test]
fn content_sections_hold_full_opacity_mid_transit() {
    let motions = portfolio_motions().unwrap();
    for m in motions.iter().filter(|m| m.id != "home") {
        assert_eq!(m.sample(0.0).opacity, 0.0);
        assert_eq!(m.sample(0.5).opacity, 1.0);
        assert_eq!(m.sample(1.0).opacity, 0.0);
        assert_eq!(m.drift_unit, DriftUnit::Percent);
        assert!(m.zoom.is_none());
    }
}

#[test]
fn opposing_parallax_directions() {
    let motions = portfolio_motions().unwrap();
    let about = motions.iter().find(|m| m.id == "about").unwrap();
    let experience = motions.iter().find(|m| m.id == "experience").unwrap();
    // About drifts downward through its transit, experience settles
    // upward into place.
    assert!(about.sample(0.0).drift < about.sample(1.0).drift);
    assert_eq!(experience.sample(1.0).drift, 0.0);
    assert!(experience.sample(0.0).drift < 0.0);
}

#[test]
fn transform_strings_for_the_presentation_layer() {
    let motions = portfolio_motions().unwrap();
    let mut buf = String::new();

    motions[0].sample(1.0).write_transform(&mut buf);
    assert_eq!(buf, "translateY(200px) scale(0.8)");

    let about = motions.iter().find(|m| m.id == "about").unwrap();
    about.sample(1.0).write_transform(&mut buf);
    assert_eq!(buf, "translateY(5%)");
}
