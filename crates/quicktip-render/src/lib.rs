//! quicktip rendering: the template substitution driver plus the glue
//! that resolves per-element tooltip templates and popup placement.
//!
//! The driver scans template text for `D{ ... }` spans, evaluates each
//! span through the expression core, and splices the stringified result
//! back in. The glue reads tooltip templates from element data
//! attributes (with `%inherit` ancestor resolution) and computes the
//! popup position — everything the embedding UI layer needs short of
//! touching the UI itself.

mod inherit;
pub mod placement;
mod template;

pub use inherit::{
    css_rule, INHERIT_SENTINEL, POPUP_SELECTOR, STYLE_ATTR, STYLE_FORMAT_ATTR, TEMPLATE_ATTR,
};
pub use placement::{place, PopupPlacement};
pub use template::{Renderer, OPEN_MARKER};
