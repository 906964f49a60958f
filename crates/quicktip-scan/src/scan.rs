//! Escape-aware scanning primitives.
//!
//! All probes treat a character as escaped when the byte immediately
//! before it is `\`. Escaping is exactly one level deep: `\\?` still
//! counts as escaped, matching the original single-character lookback
//! rule. Offsets returned by these functions are byte offsets; every
//! structural character is ASCII, so slicing at them is always valid.

/// Is the byte at `idx` escaped by a backslash immediately before it?
pub fn is_escaped(text: &str, idx: usize) -> bool {
    idx > 0 && text.as_bytes()[idx - 1] == b'\\'
}

/// Find the first unescaped occurrence of `needle` at or after `from`.
pub fn find_unescaped(text: &str, needle: char, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == needle as u8 && !is_escaped(text, i) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Find the leftmost unescaped occurrence of any operator in `ops`.
///
/// At each position the operators are tried in slice order, so callers
/// list longer spellings first (`<=` before `<`, `===` before `==`).
/// Returns the byte offset and the matched operator.
pub fn find_operator<'o>(text: &str, ops: &[&'o str]) -> Option<(usize, &'o str)> {
    for i in 0..text.len() {
        if !text.is_char_boundary(i) || is_escaped(text, i) {
            continue;
        }
        for op in ops {
            if text[i..].starts_with(op) {
                return Some((i, op));
            }
        }
    }
    None
}

/// Split a sided (binary) form on the leftmost unescaped operator.
///
/// Returns `(left, operator, right)` with both sides trimmed. The right
/// side runs to the end of the text — nested forms inside it are the
/// caller's problem (the classifier re-dispatches recursively).
pub fn split_sided<'t, 'o>(text: &'t str, ops: &[&'o str]) -> Option<(&'t str, &'o str, &'t str)> {
    let (idx, op) = find_operator(text, ops)?;
    let left = text[..idx].trim();
    let right = text[idx + op.len()..].trim();
    Some((left, op, right))
}

/// Split a ternary form `cond ? truthy : falsy`.
///
/// The condition runs to the first unescaped `?`, the truthy branch to
/// the first unescaped `:` after it. Both markers must be present;
/// captures are trimmed.
pub fn split_ternary(text: &str) -> Option<(&str, &str, &str)> {
    let q = find_unescaped(text, '?', 0)?;
    let c = find_unescaped(text, ':', q + 1)?;
    let condition = text[..q].trim();
    let truthy = text[q + 1..c].trim();
    let falsy = text[c + 1..].trim();
    Some((condition, truthy, falsy))
}

/// Resolve one level of backslash escaping: every `\x` becomes `x`.
///
/// A single pass, left to right — `\\n` yields `\n` (the doubled
/// backslash collapses, the `n` is then plain text). A trailing lone
/// backslash is kept as-is.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Find the first numeric span in `text` and parse it.
///
/// Mirrors the shared "looks like a number" pattern: optional leading
/// `-`, digits, optional `.digits`. The match may start anywhere, which
/// is a documented quirk of literal coercion — `3.5abc` yields `3.5`.
pub fn numeric_match(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let first_digit = bytes.iter().position(|b| b.is_ascii_digit())?;

    // Pull in a directly adjacent minus sign.
    let start = if first_digit > 0 && bytes[first_digit - 1] == b'-' {
        first_digit - 1
    } else {
        first_digit
    };

    let mut end = first_digit;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    // Fractional part only counts with at least one digit after the dot.
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    text[start..end].parse().ok()
}

/// Strip a matching pair of surrounding quotes (`'`, `"` or `` ` ``).
///
/// Returns the inner text when the first and last characters are the
/// same quote kind, `None` otherwise. Single-character input is never
/// quoted.
pub fn quoted_inner(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let first = bytes[0];
    if (first == b'\'' || first == b'"' || first == b'`') && bytes[bytes.len() - 1] == first {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}
