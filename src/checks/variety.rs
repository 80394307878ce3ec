//! Character variety checks - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

/// The characters the special check accepts. Deliberately a fixed set, not
/// "any non-alphanumeric": a character outside this set (e.g. `-` or space)
/// does not count.
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Returns `true` if the password contains an ASCII uppercase letter.
pub fn has_uppercase(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

/// Returns `true` if the password contains an ASCII lowercase letter.
pub fn has_lowercase(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
}

/// Returns `true` if the password contains an ASCII digit.
pub fn has_digit(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_digit())
}

/// Returns `true` if the password contains a character from
/// `!@#$%^&*(),.?":{}|<>`.
pub fn has_special(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
}
