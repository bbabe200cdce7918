/// Live-queried bounds of one named content section.
///
/// Identity is the id string; geometry is re-read from the document on
/// every detection pass and never stored across layout changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the first section in document order whose `[top, top+height)`
/// interval contains `probe`, if any.
pub fn section_under(probe: f32, sections: &[SectionBounds]) -> Option<usize> {
    sections.iter().position(|s| s.contains(probe))
}

/// Tracks which section is current for navigation highlighting.
///
/// The probe leads the raw scroll position by a fixed offset so the link
/// lights up for the section about to dominate the view, not the one
/// barely clipped at the top. When no section contains the probe (gaps
/// between sections, or above the first) the previous answer is retained —
/// hysteresis, so the highlight never flickers off mid-scroll.
#[derive(Clone, Debug)]
pub struct ActiveSection {
    lookahead: f32,
    current: Option<&'static str>,
}

impl ActiveSection {
    pub fn new(lookahead: f32) -> Self {
        Self {
            lookahead,
            current: None,
        }
    }

    /// Re-evaluate against fresh bounds. Returns the new current section
    /// only when it changed.
    pub fn update(
        &mut self,
        scroll_y: f32,
        sections: &[SectionBounds],
    ) -> Option<Option<&'static str>> {
        let probe = scroll_y + self.lookahead;
        if let Some(i) = section_under(probe, sections) {
            let id = sections[i].id;
            if self.current != Some(id) {
                self.current = Some(id);
                return Some(self.current);
            }
        }
        None
    }

    /// Force the current section, e.g. when a nav link is clicked and the
    /// smooth scroll has not landed yet.
    pub fn set_current(&mut self, id: &'static str) -> bool {
        if self.current != Some(id) {
            self.current = Some(id);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn current(&self) -> Option<&'static str> {
        self.current
    }
}
