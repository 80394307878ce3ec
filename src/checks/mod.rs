//! Password checks
//!
//! Each check tests one independent property of the password.

mod length;
mod variety;

pub use length::has_min_length;
pub use variety::{has_digit, has_lowercase, has_special, has_uppercase};
