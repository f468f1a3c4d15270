//! Server-side rendering of the dashboard.
//!
//! Pure functions from state to HTML strings: the full page, the card grid
//! fragment relayed over SSE, and the intake form. Keeping rendering pure
//! makes the board's display properties directly assertable in tests.

pub mod cards;
pub mod dashboard;
pub mod intake;

/// Minimal HTML escaping for free-text fields.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
