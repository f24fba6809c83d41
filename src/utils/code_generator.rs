//! Random short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet with
//! a cryptographically secure generator, so future codes cannot be predicted
//! from past ones.

use rand::Rng;

/// Alphabet for generated codes: lowercase, uppercase and digits.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of generated codes (62^10 possible values).
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Generates a random code of `length` characters.
///
/// Uses the thread-local generator from `rand`, a CSPRNG seeded from the
/// operating system. Uniqueness is not guaranteed; the caller checks the store.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(10);
/// assert_eq!(code.len(), 10);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}
