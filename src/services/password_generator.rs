//! Password Generator for SecurePass.
//!
//! Builds a draw alphabet from the enabled character classes and draws each
//! position independently and uniformly from it. No class is guaranteed to
//! appear in the output.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::errors::GeneratorError;
use crate::types::password::{GenerationOptions, MAX_LENGTH, MIN_LENGTH};

/// Trait defining password generation.
pub trait PasswordGeneratorTrait {
    fn generate(&mut self, options: &GenerationOptions) -> Result<String, GeneratorError>;
}

/// Concatenates the character sets of every enabled class, in class order.
///
/// Returns an empty vector when no class is enabled.
pub fn build_alphabet(options: &GenerationOptions) -> Vec<char> {
    options
        .enabled_classes()
        .iter()
        .flat_map(|class| class.charset().chars())
        .collect()
}

/// Password generator over an injectable random source.
pub struct PasswordGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator<StdRng> {
    /// A generator that yields the same sequence of passwords for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PasswordGeneratorTrait for PasswordGenerator<R> {
    fn generate(&mut self, options: &GenerationOptions) -> Result<String, GeneratorError> {
        let alphabet = build_alphabet(options);
        if alphabet.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
            return Err(GeneratorError::LengthOutOfRange(options.length));
        }

        debug!(
            length = options.length,
            alphabet_size = alphabet.len(),
            "generating password"
        );

        let password: String = (0..options.length)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())])
            .collect();
        Ok(password)
    }
}
