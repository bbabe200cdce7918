use crate::constants::{MENU_OPEN_CLASS, NAV_MENU_ID, SECTION_IDS};
use crate::dom;
use crate::events::scroll::PageWiring;
use web_sys as web;

/// Wire the navigation links and the mobile menu toggle.
///
/// A link click smooth-scrolls its section into view and overrides the
/// active section immediately, so the highlight does not lag behind the
/// scroll animation.
pub fn wire_nav(w: &PageWiring) {
    {
        let document = w.document.clone();
        dom::add_click_listener(&w.document, "nav-toggle", move |_| {
            if let Some(menu) = dom::element_by_id(&document, NAV_MENU_ID) {
                dom::toggle_class(&menu, MENU_OPEN_CLASS);
            }
        });
    }
    for id in SECTION_IDS.iter().copied() {
        wire_nav_link(w, id);
    }
}

fn wire_nav_link(w: &PageWiring, id: &'static str) {
    let document = w.document.clone();
    let w = w.clone();
    let link_id = format!("nav-{}", id);
    dom::add_click_listener(&document, &link_id, move |ev: web::Event| {
        ev.prevent_default();
        if let Some(target) = dom::element_by_id(&w.document, id) {
            dom::scroll_into_view_smooth(&target);
        }
        if w.state.borrow_mut().active.set_current(id) {
            w.active_section.set(Some(id));
        }
        if let Some(menu) = dom::element_by_id(&w.document, NAV_MENU_ID) {
            dom::set_class(&menu, MENU_OPEN_CLASS, false);
        }
        log::info!("[nav] jump to #{}", id);
    });
}
