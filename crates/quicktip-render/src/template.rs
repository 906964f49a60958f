//! The template substitution driver.
//!
//! A single explicit left-to-right escape-scanning pass — no regex
//! lookbehind. An unescaped `D{` opens a span running to the first
//! unescaped `}` on the same line; the span's inner text is classified,
//! evaluated against the context element, stringified, unescaped one
//! level, and spliced into the output. The pass is non-recursive on its
//! own output: a substituted result is never re-scanned.

use quicktip_expr::{classify, Environment, Evaluator};
use quicktip_scan::{is_escaped, unescape};

/// The span opening marker. A backslash immediately before it makes it
/// literal text (with the backslash dropped from the output).
pub const OPEN_MARKER: &str = "D{";

/// Renders tooltip templates against an [`Environment`].
pub struct Renderer<'e, E: Environment> {
    pub(crate) env: &'e E,
}

impl<'e, E: Environment> Renderer<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Self { env }
    }

    /// Substitute every `D{ ... }` span in `template` and return the
    /// resulting display text. Always returns a string, however
    /// degraded — unresolvable spans render as `undefined`.
    pub fn format_text(&self, template: &str, ctx: Option<&E::Element>) -> String {
        let evaluator = Evaluator::new(self.env);
        let mut out = String::with_capacity(template.len());
        let mut i = 0;

        while i < template.len() {
            let tail = &template[i..];

            // Escaped opener: literal `D{`, backslash removed.
            if tail.starts_with('\\') && tail[1..].starts_with(OPEN_MARKER) {
                out.push_str(OPEN_MARKER);
                i += 1 + OPEN_MARKER.len();
                continue;
            }

            if tail.starts_with(OPEN_MARKER) {
                if let Some(end) = span_end(&tail[OPEN_MARKER.len()..]) {
                    let inner = &tail[OPEN_MARKER.len()..OPEN_MARKER.len() + end];
                    let value = evaluator.evaluate(&classify(inner), ctx);
                    // One level of escaping resolves in the result, so
                    // an expression can emit a literal `}` or `D{`.
                    out.push_str(&unescape(&value.to_string()));
                    i += OPEN_MARKER.len() + end + 1;
                    continue;
                }
                // Unterminated opener: literal text.
            }

            let Some(ch) = tail.chars().next() else { break };
            out.push(ch);
            i += ch.len_utf8();
        }

        out
    }

    /// Substitute a style template. Same mechanism as
    /// [`format_text`](Renderer::format_text); the result feeds the
    /// popup's CSS property block instead of its display text.
    pub fn format_style(&self, template: &str, ctx: Option<&E::Element>) -> String {
        self.format_text(template, ctx)
    }
}

/// Offset of the span's closing `}` — the first unescaped one. Spans
/// are single-line: a newline before the close means no span at all.
fn span_end(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    for i in 0..bytes.len() {
        match bytes[i] {
            b'\n' => return None,
            b'}' if !is_escaped(text, i) => return Some(i),
            _ => {}
        }
    }
    None
}
