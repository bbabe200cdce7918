// Host-side tests for the reveal-on-view latch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/reveal.rs");
}

use reveal::{visible_fraction, RevealSet};

const VIEWPORT: f32 = 800.0;

#[test]
fn fraction_tracks_viewport_overlap() {
    // Element of height 400 at 1000; viewport 800 tall.
    assert_eq!(visible_fraction(1000.0, 400.0, 0.0, VIEWPORT), 0.0);
    // Bottom quarter of the viewport covers half the element.
    assert!((visible_fraction(1000.0, 400.0, 400.0, VIEWPORT) - 0.5).abs() < 1e-6);
    // Fully inside.
    assert_eq!(visible_fraction(1000.0, 400.0, 900.0, VIEWPORT), 1.0);
    // Scrolled past.
    assert_eq!(visible_fraction(1000.0, 400.0, 2000.0, VIEWPORT), 0.0);
}

#[test]
fn unlaid_out_elements_are_not_visible() {
    assert_eq!(visible_fraction(0.0, 0.0, 0.0, VIEWPORT), 0.0);
    assert_eq!(visible_fraction(100.0, 50.0, 0.0, 0.0), 0.0);
}

#[test]
fn latch_trips_once_and_stays() {
    let mut set = RevealSet::new(0.3);
    assert!(!set.observe("card-1", 0.1));
    assert!(!set.is_revealed("card-1"));
    // Crossing the threshold reveals, exactly once.
    assert!(set.observe("card-1", 0.35));
    assert!(!set.observe("card-1", 0.9));
    assert!(set.is_revealed("card-1"));
    // Scrolling away does not un-reveal.
    assert!(!set.observe("card-1", 0.0));
    assert!(set.is_revealed("card-1"));
}

#[test]
fn latches_are_independent_per_element() {
    let mut set = RevealSet::new(0.3);
    assert!(set.observe("a", 1.0));
    assert!(!set.is_revealed("b"));
    assert!(set.observe("b", 0.3));
    assert!(set.is_revealed("a") && set.is_revealed("b"));
}
