//! Per-element tooltip template resolution.
//!
//! Templates live in element data attributes. The `%inherit` sentinel
//! delegates to the parent element; the element whose attribute finally
//! supplies the template is the formatting context. An absent template
//! is "nothing to render" (`None`), not an error.

use quicktip_expr::Environment;

use crate::template::Renderer;

/// Data attribute holding the tooltip text template.
pub const TEMPLATE_ATTR: &str = "tt";
/// Data attribute holding the tooltip style template.
pub const STYLE_ATTR: &str = "tt_style";
/// Presence of this attribute opts the style template into substitution.
pub const STYLE_FORMAT_ATTR: &str = "tt_format_style";
/// Sentinel value delegating an attribute to the parent element.
pub const INHERIT_SENTINEL: &str = "%inherit";
/// Selector of the shared popup element the style rule targets.
pub const POPUP_SELECTOR: &str = "#tooltip-div";

/// Upper bound on the `%inherit` walk, in case the environment's
/// parent chain cycles.
const MAX_INHERIT_DEPTH: usize = 64;

impl<'e, E: Environment> Renderer<'e, E> {
    /// The fully substituted tooltip text for `el`, or `None` when no
    /// template is configured on it or any inherited-from ancestor.
    pub fn tooltip_text(&self, el: &E::Element) -> Option<String> {
        let (owner, template) = self.resolve_attr(el, TEMPLATE_ATTR)?;
        Some(self.format_text(&template, Some(&owner)))
    }

    /// The tooltip style block for `el`, or `None` when unconfigured.
    /// The style is returned verbatim unless the supplying element
    /// carries the format opt-in attribute.
    pub fn tooltip_style(&self, el: &E::Element) -> Option<String> {
        let (owner, style) = self.resolve_attr(el, STYLE_ATTR)?;
        if self.env.data_attr(&owner, STYLE_FORMAT_ATTR).is_some() {
            Some(self.format_style(&style, Some(&owner)))
        } else {
            Some(style)
        }
    }

    /// Walk the `%inherit` chain for `attr`. Returns the element that
    /// supplied the value together with the value itself.
    fn resolve_attr(&self, el: &E::Element, attr: &str) -> Option<(E::Element, String)> {
        let mut current = el.clone();
        for _ in 0..MAX_INHERIT_DEPTH {
            match self.env.data_attr(&current, attr) {
                None => return None,
                Some(v) if v == INHERIT_SENTINEL => current = self.env.parent(&current)?,
                Some(v) => return Some((current, v)),
            }
        }
        None
    }
}

/// Wrap a style property block into the popup's CSS rule. `None`
/// produces an empty rule, which resets any previously applied style.
pub fn css_rule(style: Option<&str>) -> String {
    match style {
        Some(block) => format!("{POPUP_SELECTOR} {{ {block} }}"),
        None => format!("{POPUP_SELECTOR} {{ }}"),
    }
}
