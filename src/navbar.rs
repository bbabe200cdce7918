/// One reading of the host scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Scroll offset in CSS pixels.
    pub position: f32,
    /// Event timestamp in milliseconds, as delivered by the host.
    pub timestamp: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

/// Visibility after observing a move from `previous` to `current`.
///
/// Scrolling down while deeper than `hide_threshold` hides the bar;
/// anything else (scrolling up, or hovering near the top where deltas are
/// noisy) shows it. Pure in the two positions, so resampling the same pair
/// can never oscillate.
#[inline]
pub fn visibility_after(previous: f32, current: f32, hide_threshold: f32) -> NavVisibility {
    if current > previous && current > hide_threshold {
        NavVisibility::Hidden
    } else {
        NavVisibility::Visible
    }
}

/// Two-state hide/show machine for the fixed navigation bar.
///
/// Lives for the page session; there is no terminal state.
#[derive(Clone, Debug)]
pub struct NavMotion {
    hide_threshold: f32,
    last_position: f32,
    state: NavVisibility,
}

impl NavMotion {
    pub fn new(hide_threshold: f32) -> Self {
        Self {
            hide_threshold,
            last_position: 0.0,
            state: NavVisibility::Visible,
        }
    }

    /// Feed one scroll sample. Returns the new state only on a transition;
    /// samples that do not cross the threshold or reverse direction are
    /// absorbed silently.
    pub fn sample(&mut self, sample: ScrollSample) -> Option<NavVisibility> {
        let next = visibility_after(self.last_position, sample.position, self.hide_threshold);
        self.last_position = sample.position;
        if next != self.state {
            self.state = next;
            Some(next)
        } else {
            None
        }
    }

    #[inline]
    pub fn state(&self) -> NavVisibility {
        self.state
    }
}
