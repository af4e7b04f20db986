//! Short code generation.
//!
//! Codes are drawn uniformly from a fixed lowercase alphanumeric alphabet.
//! At 10 characters over 36 symbols the collision probability is negligible
//! for realistic table sizes, so a small bounded retry in the creation flow
//! is the whole collision strategy; no hash-based scheme is needed.

use rand::Rng;

/// Alphabet public short codes are drawn from.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 10;

/// Source of candidate short codes.
///
/// Kept behind a trait so tests can substitute deterministic or deliberately
/// colliding sequences.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one candidate: [`CODE_LENGTH`] characters from
    /// [`CODE_ALPHABET`]. Pure draw from the random source, no I/O.
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }
}
