//! Ordered expression classification.
//!
//! Matchers are tried in the exact order of [`MATCH_ORDER`] and the
//! first hit wins. The order is a precedence policy, not an
//! implementation detail: ternary binds loosest, then comparison, then
//! arithmetic, then the property atoms, with literal as the catch-all.
//! `1 + 1 == 2` therefore classifies as a comparison whose left side
//! re-classifies as an operation.
//!
//! Classification is total — every input resolves to exactly one
//! variant and construction never fails. Malformed text simply falls
//! through to [`Expr::Literal`].

use quicktip_scan::{split_sided, split_ternary};
use quicktip_types::{ArithOp, CompareOp};

use crate::expr::{Call, ElementProperty, Expr, Literal, NavigatorProperty, Sided, Ternary};

/// A single classification step: pattern name + matcher.
pub type Matcher = fn(&str) -> Option<Expr>;

/// The classification order. First match wins; [`Expr::Literal`]
/// (which also recognizes call syntax) catches everything else.
pub const MATCH_ORDER: &[(&str, Matcher)] = &[
    ("ternary", match_ternary),
    ("comparison", match_comparison),
    ("operation", match_operation),
    ("element", match_element),
    ("navigator", match_navigator),
];

/// Classify raw expression text into an [`Expr`], recursing on captured
/// substrings for composite forms.
pub fn classify(text: &str) -> Expr {
    let text = text.trim();
    for (_, matcher) in MATCH_ORDER {
        if let Some(expr) = matcher(text) {
            return expr;
        }
    }
    match_call(text).unwrap_or_else(|| {
        Expr::Literal(Literal {
            text: text.to_string(),
        })
    })
}

fn match_ternary(text: &str) -> Option<Expr> {
    let (condition, truthy, falsy) = split_ternary(text)?;
    Some(Expr::Ternary(Ternary {
        condition: Box::new(classify(condition)),
        truthy: Box::new(classify(truthy)),
        falsy: Box::new(classify(falsy)),
    }))
}

fn match_comparison(text: &str) -> Option<Expr> {
    let (left, op, right) = split_sided(text, CompareOp::TOKENS)?;
    Some(Expr::Comparison(Sided {
        left: Box::new(classify(left)),
        // Unrecognized spelling defaults to loose equality.
        op: CompareOp::from_token(op).unwrap_or(CompareOp::Eq),
        right: Box::new(classify(right)),
    }))
}

fn match_operation(text: &str) -> Option<Expr> {
    let (left, op, right) = split_sided(text, ArithOp::TOKENS)?;
    Some(Expr::Operation(Sided {
        left: Box::new(classify(left)),
        // Unrecognized spelling defaults to addition.
        op: ArithOp::from_token(op).unwrap_or(ArithOp::Add),
        right: Box::new(classify(right)),
    }))
}

fn match_element(text: &str) -> Option<Expr> {
    if let Some(rest) = text.strip_prefix("el.") {
        return Some(Expr::Element(ElementProperty {
            path: rest.to_string(),
        }));
    }
    if text.starts_with("parent.") {
        // Keep the prefix: resolution re-dispatches against the parent.
        return Some(Expr::Element(ElementProperty {
            path: text.to_string(),
        }));
    }
    None
}

fn match_navigator(text: &str) -> Option<Expr> {
    let rest = text.strip_prefix("nav.")?;
    Some(Expr::Navigator(NavigatorProperty {
        name: rest.to_string(),
    }))
}

/// Recognize `name(args)` call syntax: a full-text match of an
/// identifier followed by a non-empty parenthesized argument list.
/// Arguments are split on every comma and trimmed — raw strings, never
/// nested expressions.
fn match_call(text: &str) -> Option<Expr> {
    let open = text.find('(')?;
    if open == 0 || !text.ends_with(')') {
        return None;
    }
    let name = &text[..open];
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let inner = &text[open + 1..text.len() - 1];
    if inner.is_empty() {
        return None;
    }
    Some(Expr::Call(Call {
        name: name.to_string(),
        args: inner.split(',').map(|a| a.trim().to_string()).collect(),
    }))
}
