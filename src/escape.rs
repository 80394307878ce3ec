//! Naive HTML escaping for XSS demonstrations.
//!
//! This is an educational illustration of input escaping, not a production
//! defense: it replaces a fixed five-character set and nothing else. It does
//! not parse tag structure, does not cover attribute-context breakouts, and
//! does not escape `&`. That omission means pre-existing entities in the
//! input are left alone and survive a second pass unchanged; an escaper that
//! also handled `&` would mangle them into `&amp;lt;`. Either way, apply it
//! exactly once at the output boundary.

/// Replaces `<`, `>`, `"`, `'` and `/` with their HTML entity forms.
///
/// `&` is deliberately not replaced, so entity text already present in the
/// input (or produced by an earlier pass) passes through verbatim.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            '/' => output.push_str("&#x2F;"),
            _ => output.push(ch),
        }
    }
    output
}
