//! Length check - minimum password length.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Returns `true` if the password has at least 8 characters.
///
/// Counts `char`s rather than bytes, so multi-byte characters each count
/// once.
pub fn has_min_length(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}
