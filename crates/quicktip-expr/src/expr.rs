//! Expression node variants.
//!
//! A closed tagged-variant type rather than a class hierarchy, so the
//! evaluator's match is exhaustiveness-checked. Composite nodes own
//! their children exclusively; recursive variants are boxed.

use quicktip_types::{ArithOp, CompareOp};

/// A classified tooltip expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Terminal / catch-all variant: raw text awaiting coercion.
    Literal(Literal),
    /// `name(arg1, arg2, ...)` against the fixed function registry.
    Call(Call),
    /// `el.path` / `parent.path` against the context element.
    Element(ElementProperty),
    /// `nav.name` — context-free environment query.
    Navigator(NavigatorProperty),
    /// `cond ? truthy : falsy`.
    Ternary(Ternary),
    /// `left <op> right` with a comparison operator.
    Comparison(Sided<CompareOp>),
    /// `left <op> right` with an arithmetic operator.
    Operation(Sided<ArithOp>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub text: String,
}

/// A function call. Arguments are raw trimmed strings, NOT nested
/// expressions — the argument text is split on every comma, nested
/// parentheses included. A preserved limitation of the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<String>,
}

/// An element property reference. The path is relative to the context
/// element: `data.<key>`, `style.<key>`, `checked`, `value`, or a
/// `parent.` prefix that re-dispatches against the ancestor.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementProperty {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorProperty {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ternary {
    pub condition: Box<Expr>,
    pub truthy: Box<Expr>,
    pub falsy: Box<Expr>,
}

/// A sided (binary) expression: left operand, operator, right operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Sided<Op> {
    pub left: Box<Expr>,
    pub op: Op,
    pub right: Box<Expr>,
}
