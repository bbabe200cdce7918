use fnv::FnvHashSet;

/// Fraction of a region currently inside the viewport, in [0, 1].
///
/// `top` is document-space; regions not yet laid out (zero height) count
/// as not visible.
pub fn visible_fraction(top: f32, height: f32, scroll_y: f32, viewport_h: f32) -> f32 {
    if height <= 0.0 || viewport_h <= 0.0 {
        return 0.0;
    }
    let view_bottom = scroll_y + viewport_h;
    let overlap = (view_bottom.min(top + height) - scroll_y.max(top)).max(0.0);
    overlap / height
}

/// One-shot has-entered-viewport latches, keyed by element id.
///
/// An element reveals the first time its visible fraction reaches
/// `amount` and stays revealed for the rest of the page session; leaving
/// the viewport never un-reveals it.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    amount: f32,
    revealed: FnvHashSet<String>,
}

impl RevealSet {
    pub fn new(amount: f32) -> Self {
        Self {
            amount,
            revealed: FnvHashSet::default(),
        }
    }

    /// Feed the current visible fraction for `id`. Returns true exactly
    /// once, on the observation that trips the latch.
    pub fn observe(&mut self, id: &str, fraction: f32) -> bool {
        if fraction < self.amount || self.revealed.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_owned());
        true
    }

    #[inline]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}
