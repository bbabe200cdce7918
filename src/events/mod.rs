pub mod nav;
pub mod scroll;

pub use nav::wire_nav;
pub use scroll::{
    apply_scroll, collect_motion_targets, collect_reveal_targets, wire_resize, wire_scroll,
    PageWiring, ScrollState,
};
