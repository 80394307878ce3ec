//! Caesar cipher - fixed-shift substitution over ASCII letters.
//!
//! A classroom cipher with no security value; it exists to demonstrate
//! substitution, not to protect anything.

/// Shift used by [`encrypt`] and [`decrypt`].
pub const DEFAULT_SHIFT: i32 = 3;

/// Rotates every ASCII letter in `text` by `shift` positions within its case
/// band; all other characters pass through unchanged.
///
/// With `reverse` set the shift is negated, so transforming and then
/// reverse-transforming with the same shift returns the original text.
/// Accepts any `i32` shift; values outside `0..26` wrap. Non-Latin letters
/// are treated as non-alphabetic and left alone.
pub fn caesar_transform(text: &str, shift: i32, reverse: bool) -> String {
    // Normalize before negating so i32::MIN cannot overflow.
    let shift = shift.rem_euclid(26) as u8;
    let shift = if reverse { (26 - shift) % 26 } else { shift };

    text.chars().map(|c| rotate(c, shift)).collect()
}

/// Encrypts `text` with the default shift of 3.
pub fn encrypt(text: &str) -> String {
    caesar_transform(text, DEFAULT_SHIFT, false)
}

/// Decrypts text that was encrypted with the default shift of 3.
pub fn decrypt(text: &str) -> String {
    caesar_transform(text, DEFAULT_SHIFT, true)
}

fn rotate(c: char, shift: u8) -> char {
    let base = if c.is_ascii_uppercase() {
        b'A'
    } else if c.is_ascii_lowercase() {
        b'a'
    } else {
        return c;
    };
    ((c as u8 - base + shift) % 26 + base) as char
}
