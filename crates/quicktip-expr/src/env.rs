//! The environment capability trait.
//!
//! Everything the expression core needs from its surroundings: element
//! queries for `el.`/`parent.` references, identifier resolution for
//! the `element(id)` builtin, and the navigator properties. The element
//! handle is an opaque associated type; the core only reads through
//! these methods and never mutates the context.

/// Read-only capability interface supplied by the embedding UI layer.
pub trait Environment {
    /// Opaque handle to a UI element.
    type Element: Clone;

    /// A named custom data attribute, if set.
    fn data_attr(&self, el: &Self::Element, key: &str) -> Option<String>;

    /// A named inline style property, if set.
    fn inline_style(&self, el: &Self::Element, key: &str) -> Option<String>;

    /// Whether the element is in a checked state.
    fn is_checked(&self, el: &Self::Element) -> bool;

    /// The element's current value, if it has one.
    fn value(&self, el: &Self::Element) -> Option<String>;

    /// The element's parent, or `None` at the root.
    fn parent(&self, el: &Self::Element) -> Option<Self::Element>;

    /// Resolve an element by identifier.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The environment's user-agent string.
    fn user_agent(&self) -> String;

    /// Whether the environment is a secure context.
    fn is_secure_context(&self) -> bool;
}
