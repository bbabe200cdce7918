use crate::constants::{REVEALED_CLASS, SECTION_IDS};
use crate::dom;
use crate::motion::SectionMotion;
use crate::navbar::{NavMotion, NavVisibility, ScrollSample};
use crate::observe::Observable;
use crate::progress::ScrollSpan;
use crate::reveal::{visible_fraction, RevealSet};
use crate::sections::{ActiveSection, SectionBounds};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mutable per-session scroll state, owned by the wiring and mutated only
/// from scroll/resize handlers (all on the UI thread).
pub struct ScrollState {
    pub nav: NavMotion,
    pub active: ActiveSection,
    pub reveals: RevealSet,
    transform_buf: String,
}

impl ScrollState {
    pub fn new(nav: NavMotion, active: ActiveSection, reveals: RevealSet) -> Self {
        Self {
            nav,
            active,
            reveals,
            transform_buf: String::new(),
        }
    }
}

/// A section motion bound to its DOM elements: the section provides the
/// live geometry, the (untransformed) inner target receives the styles.
/// Keeping the two apart stops the applied transform from feeding back
/// into the measured span.
pub struct MotionTarget {
    pub motion: SectionMotion,
    pub section: web::HtmlElement,
    pub target: web::HtmlElement,
}

pub struct RevealTarget {
    pub key: String,
    pub element: web::HtmlElement,
}

/// Everything the scroll pipeline needs, cheap to clone into closures.
#[derive(Clone)]
pub struct PageWiring {
    pub document: web::Document,
    pub state: Rc<RefCell<ScrollState>>,
    pub motions: Rc<Vec<MotionTarget>>,
    pub reveal_targets: Rc<Vec<RevealTarget>>,
    pub nav_visibility: Observable<NavVisibility>,
    pub active_section: Observable<Option<&'static str>>,
}

/// Resolve the motion table against the document. Sections that are not
/// in the markup are skipped; a section without a dedicated `<id>-motion`
/// child animates itself.
pub fn collect_motion_targets(
    document: &web::Document,
    motions: Vec<SectionMotion>,
) -> Vec<MotionTarget> {
    motions
        .into_iter()
        .filter_map(|motion| {
            let Some(section) = dom::element_by_id(document, motion.id) else {
                log::info!("[motion] section #{} not in document, skipping", motion.id);
                return None;
            };
            let target = dom::element_by_id(document, &format!("{}-motion", motion.id))
                .unwrap_or_else(|| section.clone());
            Some(MotionTarget {
                motion,
                section,
                target,
            })
        })
        .collect()
}

/// Elements opting into the reveal-on-view latch via the `reveal` class.
/// Latches are keyed by element id, falling back to document position.
pub fn collect_reveal_targets(document: &web::Document) -> Vec<RevealTarget> {
    let mut targets = Vec::new();
    let Ok(nodes) = document.query_selector_all(".reveal") else {
        return targets;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let id = element.id();
        let key = if id.is_empty() {
            format!("reveal-{}", i)
        } else {
            id
        };
        targets.push(RevealTarget { key, element });
    }
    targets
}

/// The scroll pipeline: one pass over navbar state, active section,
/// section motions, and reveal latches for a single scroll sample.
/// Geometry is re-read from the document on every call.
pub fn apply_scroll(w: &PageWiring, sample: ScrollSample) {
    let scroll = sample.position;
    let viewport_h = dom::viewport_height();

    // Section bounds, live. Inline capacity covers every realistic page.
    let bounds: SmallVec<[SectionBounds; 8]> = SECTION_IDS
        .iter()
        .copied()
        .filter_map(|id| {
            let el = dom::element_by_id(&w.document, id)?;
            let (top, height) = dom::offset_bounds(&el);
            Some(SectionBounds { id, top, height })
        })
        .collect();

    // State transitions first, with the borrow released before observers
    // run.
    let (nav_change, active_change) = {
        let mut st = w.state.borrow_mut();
        (st.nav.sample(sample), st.active.update(scroll, &bounds))
    };
    if let Some(next) = nav_change {
        log::info!("[nav] {:?}", next);
        w.nav_visibility.set(next);
    }
    if let Some(current) = active_change {
        w.active_section.set(current);
    }

    // Scroll-linked section styles.
    {
        let mut st = w.state.borrow_mut();
        for mt in w.motions.iter() {
            let (top, height) = dom::offset_bounds(&mt.section);
            let span = ScrollSpan::for_region(top, height, viewport_h, mt.motion.anchors);
            let style = mt.motion.sample(span.progress(scroll));
            dom::set_opacity(&mt.target, style.opacity);
            style.write_transform(&mut st.transform_buf);
            dom::set_transform(&mt.target, &st.transform_buf);
        }
    }

    // Reveal latches trip once and stay.
    for rt in w.reveal_targets.iter() {
        let (top, height) = dom::document_bounds(&rt.element, scroll);
        let fraction = visible_fraction(top, height, scroll, viewport_h);
        if w.state.borrow_mut().reveals.observe(&rt.key, fraction) {
            dom::set_class(&rt.element, REVEALED_CLASS, true);
        }
    }
}

fn current_sample(ev: &web::Event) -> ScrollSample {
    ScrollSample {
        position: dom::scroll_y(),
        timestamp: ev.time_stamp(),
    }
}

pub fn wire_scroll(w: &PageWiring) {
    let w = w.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "scroll", move |ev| {
            apply_scroll(&w, current_sample(&ev));
        });
    }
}

/// Layout changed under us; replay the pipeline at the current position
/// so spans and bounds are re-derived from fresh geometry.
pub fn wire_resize(w: &PageWiring) {
    let w = w.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |ev| {
            apply_scroll(&w, current_sample(&ev));
        });
    }
}
