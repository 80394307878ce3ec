//! Educational security building blocks
//!
//! This library packages three classroom security concepts as small pure
//! functions: password strength checks, a Caesar cipher, and naive HTML
//! escaping. Everything here is meant for teaching; none of it is
//! production-grade security tooling (the cipher is trivially breakable and
//! the escaper is not a real sanitizer).
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation
//!   support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use cybersec_basics::{evaluate_password_strength, caesar_transform, escape_html};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {}", evaluation.score());
//! println!("Strength: {}", evaluation.strength());
//!
//! assert_eq!(caesar_transform("Attack", 3, false), "Dwwdfn");
//! assert_eq!(escape_html("<b>"), "&lt;b&gt;");
//! ```

// Internal modules
mod checks;
mod cipher;
mod escape;
mod evaluator;
mod types;

// Public API
pub use cipher::{caesar_transform, decrypt, encrypt, DEFAULT_SHIFT};
pub use escape::escape_html;
pub use evaluator::evaluate_password_strength;
pub use types::{PasswordChecks, PasswordEvaluation, StrengthLabel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
