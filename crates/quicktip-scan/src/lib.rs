//! quicktip text scanning: escape-aware structural probes over raw text.
//!
//! This is deliberately NOT a tokenizer. Tooltip expressions are short,
//! single-line, human-authored fragments, so the classifier works by
//! probing raw text for structural patterns (an operator occurrence, a
//! `? :` pair, a quote pair) instead of building a token stream. Every
//! probe here honours backslash escaping explicitly — a character
//! immediately preceded by `\` is never a structural match.

pub mod scan;

pub use scan::{
    find_operator, find_unescaped, is_escaped, numeric_match, quoted_inner, split_sided,
    split_ternary, unescape,
};
