#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::events::{PageWiring, ScrollState};
use crate::navbar::{NavMotion, NavVisibility, ScrollSample};
use crate::observe::{Observable, Subscription};
use crate::particles::{FieldParams, ParticleField};
use crate::reveal::RevealSet;
use crate::sections::ActiveSection;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod motion;
mod navbar;
mod observe;
mod particles;
mod progress;
mod reveal;
mod sections;
mod track;

/// Everything that must stay alive for the page session. Dropping it
/// unregisters the particle loop from the frame clock and detaches the
/// nav subscriptions.
pub struct Engine {
    _frame_loop: frame::FrameLoop,
    _subscriptions: Vec<Subscription>,
}

thread_local! {
    static ENGINE: RefCell<Option<Engine>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match init() {
        Ok(engine) => ENGINE.with(|slot| *slot.borrow_mut() = Some(engine)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Tear the engine down: stop the particle loop and drop the nav
/// subscriptions. Scroll listeners stay attached but become no-ops for
/// state the engine owned.
#[wasm_bindgen]
pub fn shutdown() {
    let had = ENGINE.with(|slot| slot.borrow_mut().take()).is_some();
    if had {
        log::info!("folio-web shut down");
    }
}

fn init() -> anyhow::Result<Engine> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Observable UI state, owned here, consumed by the nav subscriptions
    // below (and whatever else subscribes later).
    let nav_visibility = Observable::new(NavVisibility::Visible);
    let active_section: Observable<Option<&'static str>> = Observable::new(None);

    let state = Rc::new(RefCell::new(ScrollState::new(
        NavMotion::new(NAV_HIDE_THRESHOLD_PX),
        ActiveSection::new(SECTION_LOOKAHEAD_PX),
        RevealSet::new(REVEAL_AMOUNT),
    )));

    let motions = events::collect_motion_targets(&document, motion::portfolio_motions()?);
    let reveal_targets = events::collect_reveal_targets(&document);
    log::info!(
        "[init] {} section motions, {} reveal targets",
        motions.len(),
        reveal_targets.len()
    );

    let wiring = PageWiring {
        document: document.clone(),
        state,
        motions: Rc::new(motions),
        reveal_targets: Rc::new(reveal_targets),
        nav_visibility: nav_visibility.clone(),
        active_section: active_section.clone(),
    };

    events::wire_scroll(&wiring);
    events::wire_resize(&wiring);
    events::wire_nav(&wiring);
    let subscriptions = wire_nav_ui(&document, &nav_visibility, &active_section);

    // First paint must match the current scroll offset, not assume the
    // top of the page (reloads restore scroll position).
    events::apply_scroll(
        &wiring,
        ScrollSample {
            position: dom::scroll_y(),
            timestamp: 0.0,
        },
    );

    // Particle field on the frame clock.
    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(
        FieldParams {
            count: PARTICLE_COUNT,
            half_extent: SPAWN_HALF_EXTENT,
            update_stride: PARTICLE_UPDATE_STRIDE,
            frequency: DRIFT_FREQUENCY,
            amplitude: DRIFT_AMPLITUDE,
            scale_min: SPAWN_SCALE_MIN,
            scale_max: SPAWN_SCALE_MAX,
        },
        &mut rng,
    );
    let mut scene = frame::ParticleScene::new(document, field, PARTICLE_LAYER_ID);
    let frame_loop = frame::start_loop(move || scene.frame());

    Ok(Engine {
        _frame_loop: frame_loop,
        _subscriptions: subscriptions,
    })
}

/// Subscribe the navigation chrome to the observable state: the bar hides
/// by class, links highlight by class.
fn wire_nav_ui(
    document: &web::Document,
    nav_visibility: &Observable<NavVisibility>,
    active_section: &Observable<Option<&'static str>>,
) -> Vec<Subscription> {
    let mut subscriptions = Vec::new();

    {
        let document = document.clone();
        subscriptions.push(nav_visibility.subscribe(move |state| {
            if let Some(nav) = dom::element_by_id(&document, NAV_ID) {
                dom::set_class(&nav, NAV_HIDDEN_CLASS, *state == NavVisibility::Hidden);
            }
        }));
    }

    {
        let document = document.clone();
        subscriptions.push(active_section.subscribe(move |current| {
            for id in SECTION_IDS.iter().copied() {
                if let Some(link) = dom::element_by_id(&document, &format!("nav-{}", id)) {
                    dom::set_class(&link, NAV_ACTIVE_CLASS, *current == Some(id));
                }
            }
        }));
    }

    subscriptions
}
