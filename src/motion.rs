use crate::progress::SpanAnchors;
use crate::track::Track;
use anyhow::Result;
use std::fmt::Write;

/// Unit of a section's vertical drift output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriftUnit {
    Px,
    Percent,
}

/// Scroll-linked animation recipe for one section: which anchor rule maps
/// scroll to progress, and the keyframe tracks progress is pushed through.
pub struct SectionMotion {
    pub id: &'static str,
    pub anchors: SpanAnchors,
    pub opacity: Track<f32>,
    pub drift: Track<f32>,
    pub drift_unit: DriftUnit,
    pub zoom: Option<Track<f32>>,
}

/// Visual parameters for one section at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionStyle {
    pub opacity: f32,
    pub drift: f32,
    pub drift_unit: DriftUnit,
    pub zoom: Option<f32>,
}

impl SectionMotion {
    pub fn sample(&self, progress: f32) -> SectionStyle {
        SectionStyle {
            opacity: self.opacity.sample(progress),
            drift: self.drift.sample(progress),
            drift_unit: self.drift_unit,
            zoom: self.zoom.as_ref().map(|z| z.sample(progress)),
        }
    }
}

impl SectionStyle {
    /// Append the CSS transform for this style to `out` (cleared first).
    /// The buffer is caller-owned so the scroll path reuses one
    /// allocation.
    pub fn write_transform(&self, out: &mut String) {
        out.clear();
        let unit = match self.drift_unit {
            DriftUnit::Px => "px",
            DriftUnit::Percent => "%",
        };
        let _ = write!(out, "translateY({}{})", self.drift, unit);
        if let Some(z) = self.zoom {
            let _ = write!(out, " scale({})", z);
        }
    }
}

/// The portfolio page's motion table.
///
/// The hero spans the full first viewport, so it animates over the page's
/// own scroll from a standing start; the content sections fade through
/// their viewport transit and drift a few percent for parallax.
pub fn portfolio_motions() -> Result<Vec<SectionMotion>> {
    Ok(vec![
        SectionMotion {
            id: "home",
            anchors: SpanAnchors::TopToExit,
            opacity: Track::new(&[(0.0, 1.0), (0.5, 0.0)])?,
            drift: Track::new(&[(0.0, 0.0), (1.0, 200.0)])?,
            drift_unit: DriftUnit::Px,
            zoom: Some(Track::new(&[(0.0, 1.0), (1.0, 0.8)])?),
        },
        SectionMotion {
            id: "about",
            anchors: SpanAnchors::EnterToExit,
            opacity: Track::new(&[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)])?,
            drift: Track::new(&[(0.0, -5.0), (1.0, 5.0)])?,
            drift_unit: DriftUnit::Percent,
            zoom: None,
        },
        SectionMotion {
            id: "projects",
            anchors: SpanAnchors::EnterToExit,
            opacity: Track::new(&[(0.0, 0.0), (0.2, 1.0), (0.9, 1.0), (1.0, 0.0)])?,
            drift: Track::new(&[(0.0, 0.0), (1.0, 20.0)])?,
            drift_unit: DriftUnit::Percent,
            zoom: None,
        },
        SectionMotion {
            id: "experience",
            anchors: SpanAnchors::EnterToExit,
            opacity: Track::new(&[(0.0, 0.0), (0.2, 1.0), (0.9, 1.0), (1.0, 0.0)])?,
            drift: Track::new(&[(0.0, -20.0), (1.0, 0.0)])?,
            drift_unit: DriftUnit::Percent,
            zoom: None,
        },
    ])
}
