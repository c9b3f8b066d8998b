//! Markup escaping for rendered fragments.
//!
//! Record data is arbitrary, so every text or attribute interpolation in
//! the collaborators goes through [`escape`]. Custom cell and action
//! renderers return markup and are interpolated verbatim; that contract
//! belongs to the caller, exactly like a custom render function in any
//! host framework.

/// Escape text for safe interpolation into element content or a
/// double-quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
