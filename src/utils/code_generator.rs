//! Short code generation.
//!
//! Codes are drawn uniformly from [`ALPHABET`], which leaves out characters
//! that are easy to misread (`0`/`O`, `1`/`I`/`l`).

use rand::Rng;

/// The 57 characters a generated code may contain.
pub const ALPHABET: &[u8] = b"abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Default code length. 57^6 is roughly 3.4e10 combinations.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random code of `length` characters.
///
/// Uses the thread-local CSPRNG seeded from the operating system, so codes
/// cannot be predicted from previously issued ones.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `code` could have been produced by [`generate_code`]
/// with the given length.
pub fn is_well_formed(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| ALPHABET.contains(&b))
}
