//! Tests for the escape-aware scanning primitives.
//!
//! Covers: unescaped search, leftmost/longest-first operator matching,
//! sided and ternary splitting, one-level unescaping, the numeric
//! match quirk, and quote-pair stripping.

use quicktip_scan::{
    find_operator, find_unescaped, numeric_match, quoted_inner, split_sided, split_ternary,
    unescape,
};

const COMPARISON_OPS: &[&str] = &["<=", ">=", "===", "!==", "==", "!=", "<", ">"];
const ARITH_OPS: &[&str] = &["+", "-", "*", "/", "%", "^"];

// ─────────────────────────────────────────────────────────────────────
// find_unescaped
// ─────────────────────────────────────────────────────────────────────

#[test]
fn finds_first_occurrence() {
    assert_eq!(find_unescaped("a ? b ? c", '?', 0), Some(2));
}

#[test]
fn skips_escaped_occurrence() {
    assert_eq!(find_unescaped(r"a \? b ? c", '?', 0), Some(7));
}

#[test]
fn respects_start_offset() {
    assert_eq!(find_unescaped("a ? b ? c", '?', 3), Some(6));
}

#[test]
fn missing_needle_is_none() {
    assert_eq!(find_unescaped("abc", '?', 0), None);
}

// ─────────────────────────────────────────────────────────────────────
// find_operator / split_sided
// ─────────────────────────────────────────────────────────────────────

#[test]
fn longest_spelling_wins_at_a_position() {
    assert_eq!(find_operator("a === b", COMPARISON_OPS), Some((2, "===")));
    assert_eq!(find_operator("a <= b", COMPARISON_OPS), Some((2, "<=")));
    assert_eq!(find_operator("a == b", COMPARISON_OPS), Some((2, "==")));
}

#[test]
fn leftmost_operator_wins() {
    assert_eq!(find_operator("a < b <= c", COMPARISON_OPS), Some((2, "<")));
}

#[test]
fn split_sided_trims_both_sides() {
    assert_eq!(
        split_sided("  1 + 1  ", ARITH_OPS),
        Some(("1", "+", "1"))
    );
}

#[test]
fn split_sided_right_runs_to_end() {
    assert_eq!(
        split_sided("1 + 2 + 3", ARITH_OPS),
        Some(("1", "+", "2 + 3"))
    );
}

#[test]
fn escaped_operator_is_not_a_split_point() {
    assert_eq!(split_sided(r"a \+ b", ARITH_OPS), None);
}

#[test]
fn empty_left_side_is_allowed() {
    // A leading minus splits with an empty left side.
    assert_eq!(split_sided("-3.5", ARITH_OPS), Some(("", "-", "3.5")));
}

// ─────────────────────────────────────────────────────────────────────
// split_ternary
// ─────────────────────────────────────────────────────────────────────

#[test]
fn ternary_splits_on_first_markers() {
    assert_eq!(
        split_ternary("a > 1 ? 'x' : 'y'"),
        Some(("a > 1", "'x'", "'y'"))
    );
}

#[test]
fn ternary_requires_both_markers() {
    assert_eq!(split_ternary("a ? b"), None);
    assert_eq!(split_ternary("a : b"), None);
}

#[test]
fn ternary_colon_must_follow_question() {
    assert_eq!(split_ternary("a : b ? c"), None);
}

#[test]
fn escaped_ternary_markers_are_literal() {
    assert_eq!(split_ternary(r"a \? b : c"), None);
    assert_eq!(split_ternary(r"a ? b \: c"), None);
}

#[test]
fn nested_ternary_stays_in_falsy_branch() {
    assert_eq!(
        split_ternary("a ? b : c ? d : e"),
        Some(("a", "b", "c ? d : e"))
    );
}

// ─────────────────────────────────────────────────────────────────────
// unescape
// ─────────────────────────────────────────────────────────────────────

#[test]
fn unescape_resolves_one_level() {
    assert_eq!(unescape(r"a\?b"), "a?b");
    assert_eq!(unescape(r"\}"), "}");
}

#[test]
fn unescape_collapses_doubled_backslash() {
    assert_eq!(unescape(r"a\\b"), r"a\b");
}

#[test]
fn unescape_keeps_trailing_backslash() {
    assert_eq!(unescape(r"tail\"), r"tail\");
}

#[test]
fn unescape_is_single_pass() {
    // The second backslash pair does not re-combine with the `?`.
    assert_eq!(unescape(r"\\?"), r"\?");
}

// ─────────────────────────────────────────────────────────────────────
// numeric_match
// ─────────────────────────────────────────────────────────────────────

#[test]
fn parses_integers_and_floats() {
    assert_eq!(numeric_match("42"), Some(42.0));
    assert_eq!(numeric_match("-3.5"), Some(-3.5));
}

#[test]
fn accepts_a_partial_match() {
    // Documented quirk: the numeric span need not cover the full text.
    assert_eq!(numeric_match("3.5abc"), Some(3.5));
    assert_eq!(numeric_match("x10"), Some(10.0));
}

#[test]
fn dot_without_following_digit_is_not_fractional() {
    assert_eq!(numeric_match("1."), Some(1.0));
}

#[test]
fn no_digits_means_no_match() {
    assert_eq!(numeric_match("abc"), None);
    assert_eq!(numeric_match(""), None);
}

// ─────────────────────────────────────────────────────────────────────
// quoted_inner
// ─────────────────────────────────────────────────────────────────────

#[test]
fn strips_each_quote_kind() {
    assert_eq!(quoted_inner("'hi'"), Some("hi"));
    assert_eq!(quoted_inner("\"hi\""), Some("hi"));
    assert_eq!(quoted_inner("`hi`"), Some("hi"));
}

#[test]
fn quote_kinds_must_match() {
    assert_eq!(quoted_inner("'hi\""), None);
}

#[test]
fn single_character_is_not_quoted() {
    assert_eq!(quoted_inner("'"), None);
}

#[test]
fn empty_quotes_yield_empty_inner() {
    assert_eq!(quoted_inner("''"), Some(""));
}
