pub mod error;
pub mod hash;

pub use error::Error;
pub use hash::{HashPrefixGenerator, HashPrefixSettings};

use hashlink_core::ShortCode;

/// Trait for deriving short codes from input strings.
///
/// Implementations are pure: they never touch storage, and the same input
/// must always produce the same code. They are not required to detect
/// collisions between different inputs.
pub trait Generator: Send + Sync + 'static {
    /// Derives the short code for `input`. Any string is accepted.
    fn generate(&self, input: &str) -> ShortCode;
}
