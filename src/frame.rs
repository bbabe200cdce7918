use crate::dom;
use crate::particles::ParticleField;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle on a running `requestAnimationFrame` loop.
///
/// Dropping the handle (or calling [`FrameLoop::stop`]) unregisters from
/// the frame clock; without that, torn-down views keep a dangling
/// callback alive for the rest of the session. Drop it from outside a
/// frame callback.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.alive.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}

/// Run `on_frame` once per animation frame until the returned handle is
/// stopped or dropped.
pub fn start_loop(mut on_frame: impl FnMut() + 'static) -> FrameLoop {
    let alive = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        on_frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                pending_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            pending.set(Some(id));
        }
    }

    FrameLoop {
        alive,
        pending,
        tick,
    }
}

/// Per-frame state for the particle layer: the simulated field, the DOM
/// nodes it renders through, and the clock the oscillation runs on.
pub struct ParticleScene {
    document: web::Document,
    field: ParticleField,
    nodes: Vec<web::HtmlElement>,
    layer_id: &'static str,
    started: Instant,
    transform_buf: String,
}

impl ParticleScene {
    pub fn new(document: web::Document, field: ParticleField, layer_id: &'static str) -> Self {
        let mut scene = Self {
            document,
            field,
            nodes: Vec::new(),
            layer_id,
            started: Instant::now(),
            transform_buf: String::new(),
        };
        scene.ensure_nodes();
        scene
    }

    /// Create one node per particle under the layer element. A missing
    /// layer is a normal transient (not yet mounted); we retry next frame.
    fn ensure_nodes(&mut self) {
        if !self.nodes.is_empty() {
            return;
        }
        let Some(layer) = dom::element_by_id(&self.document, self.layer_id) else {
            return;
        };
        for _ in 0..self.field.len() {
            let Ok(el) = self.document.create_element("div") else {
                continue;
            };
            _ = el.class_list().add_1("particle");
            if layer.append_child(&el).is_ok() {
                if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                    self.nodes.push(el);
                }
            }
        }
    }

    /// One frame tick: advance the simulation and, on ticks where the
    /// field actually moved, push fresh transforms to the DOM. Skipped
    /// ticks leave the retained transforms in place.
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        if !self.field.tick(elapsed) {
            return;
        }
        self.ensure_nodes();
        if self.nodes.is_empty() {
            return;
        }
        for (node, mat) in self.nodes.iter().zip(self.field.transforms()) {
            dom::write_matrix3d(&mat, &mut self.transform_buf);
            dom::set_transform(node, &self.transform_buf);
        }
    }
}
