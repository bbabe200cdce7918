use glam::Mat4;
use std::fmt::Write;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Document-space top and height of an element, independent of current
/// scroll. Re-queried on every use; layout moves under us.
#[inline]
pub fn document_bounds(el: &web::Element, scroll_y: f32) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.top() as f32 + scroll_y, rect.height() as f32)
}

/// Offset-parent-space bounds, matching what section anchors are laid out
/// against. Top-level sections make this document space too.
#[inline]
pub fn offset_bounds(el: &web::HtmlElement) -> (f32, f32) {
    (el.offset_top() as f32, el.offset_height() as f32)
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, value: f32) {
    _ = el.style().set_property("opacity", &format!("{}", value));
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, css: &str) {
    _ = el.style().set_property("transform", css);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    if on {
        _ = list.add_1(class);
    } else {
        _ = list.remove_1(class);
    }
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str) {
    _ = el.class_list().toggle(class);
}

pub fn scroll_into_view_smooth(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Attach a listener for `event` on `target`. The closure is leaked into
/// the page session, as listeners here live until unload.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>,
    );
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

/// Render a column-major CSS `matrix3d(...)` for `mat` into `out`,
/// reusing the buffer across frames.
pub fn write_matrix3d(mat: &Mat4, out: &mut String) {
    out.clear();
    out.push_str("matrix3d(");
    for (i, v) in mat.to_cols_array().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", v);
    }
    out.push(')');
}
