//! Short invitation identifiers.
//!
//! Identifiers are 8 characters of lowercase base 36, meant to be read out
//! or typed by hand. Uniqueness is best effort: nothing checks a fresh ID
//! against the IDs already stored.

use rand::Rng;

/// Length of a generated identifier.
pub const ID_LENGTH: usize = 8;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of invitation identifiers.
///
/// Closures returning `String` implement this trait, which makes fixed or
/// scripted identifiers easy to supply in tests.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// Generates random identifiers from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> String {
        generate_id()
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn generate(&mut self) -> String {
        self()
    }
}

/// Generates one random identifier.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
