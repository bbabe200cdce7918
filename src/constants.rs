/// Scroll and particle tuning constants.
///
/// These constants express intended behavior (thresholds, cadences, spawn
/// ranges) and keep magic numbers out of the code, improving readability.
// Minimum scroll depth before the navbar is allowed to hide
pub const NAV_HIDE_THRESHOLD_PX: f32 = 150.0;

// Forward offset added to scroll position when picking the active section,
// so the highlighted link leads the section actually entering view
pub const SECTION_LOOKAHEAD_PX: f32 = 300.0;

// Visible fraction of an element required to trip its reveal latch
pub const REVEAL_AMOUNT: f32 = 0.3;

// Particle field population
pub const PARTICLE_COUNT: usize = 30;

// Position updates run once per this many frame ticks
pub const PARTICLE_UPDATE_STRIDE: u32 = 5;

// Oscillation around each particle's spawn origin
pub const DRIFT_FREQUENCY: f32 = 0.05; // radians per second
pub const DRIFT_AMPLITUDE: f32 = 0.01; // world units

// Spawn volume half-extent per axis (world units)
pub const SPAWN_HALF_EXTENT: f32 = 12.5;

// Spawn ranges for per-particle scale
pub const SPAWN_SCALE_MIN: f32 = 0.1;
pub const SPAWN_SCALE_MAX: f32 = 0.4;

// Ordered content sections, in document order; ids double as DOM ids
pub const SECTION_IDS: &[&str] = &["about", "projects", "experience", "contact"];

// Element ids the wiring layer expects in the host page
pub const NAV_ID: &str = "site-nav";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const PARTICLE_LAYER_ID: &str = "particle-field";

// Class names toggled on host elements
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "open";
pub const REVEALED_CLASS: &str = "revealed";
