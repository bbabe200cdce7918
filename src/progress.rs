/// Anchor rules tying a region's scroll span to the viewport.
///
/// The span is the scroll interval over which a tracked region moves from
/// progress 0 to progress 1; the two modes differ only in where the span
/// starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanAnchors {
    /// 0 when the region's top edge reaches the viewport bottom, 1 when
    /// its bottom edge passes the viewport top. Used for section fades.
    EnterToExit,
    /// 0 with the region's top edge at the viewport top, 1 when its bottom
    /// edge passes the viewport top. Used for the hero shrink/translate,
    /// whose region starts the page already fully in view.
    TopToExit,
}

/// Scroll interval `[start, end]` over which a region transitions.
///
/// Derived from live geometry on every use; element positions move with
/// layout, so spans are never cached across reflows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpan {
    pub start: f32,
    pub end: f32,
}

impl ScrollSpan {
    /// Span for a region at document-space `top` with `height`, under the
    /// given anchor rule and viewport height.
    pub fn for_region(top: f32, height: f32, viewport_h: f32, anchors: SpanAnchors) -> Self {
        let start = match anchors {
            SpanAnchors::EnterToExit => top - viewport_h,
            SpanAnchors::TopToExit => top,
        };
        Self {
            start,
            end: top + height,
        }
    }

    /// Normalized progress in [0, 1] at `scroll`.
    pub fn progress(&self, scroll: f32) -> f32 {
        self.progress_signed(scroll).clamp(0.0, 1.0)
    }

    /// Raw signed progress: negative before the span, above 1 past it.
    /// Feeds continuous parallax where the clamped value would plateau.
    pub fn progress_signed(&self, scroll: f32) -> f32 {
        let len = self.end - self.start;
        if len <= 0.0 {
            // Zero-height region: step at the start anchor
            return if scroll < self.start { 0.0 } else { 1.0 };
        }
        (scroll - self.start) / len
    }
}
