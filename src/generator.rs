//! Secure password generator
//!
//! Builds passwords constructively: one character from each mandatory class,
//! the rest from the union of all classes, then a Fisher-Yates shuffle. Every
//! result passes [`validate_password`](crate::validate_password).

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

use crate::rules::{MIN_LENGTH, SPECIAL_CHARS};

/// Length used by [`generate_default_password`].
pub const DEFAULT_GENERATED_LENGTH: usize = 12;

/// Longest password the generator produces; larger requests are lowered to it.
pub const MAX_GENERATED_LENGTH: usize = 128;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}

/// Generates a password of `length` characters using the OS CSPRNG.
///
/// The length is clamped into `MIN_LENGTH..=MAX_GENERATED_LENGTH`.
pub fn generate_secure_password(length: usize) -> SecretString {
    generate_secure_password_with(&mut OsRng, length)
}

/// Generates a password of [`DEFAULT_GENERATED_LENGTH`] characters.
pub fn generate_default_password() -> SecretString {
    generate_secure_password(DEFAULT_GENERATED_LENGTH)
}

/// Same as [`generate_secure_password`] with a caller-supplied RNG.
pub fn generate_secure_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    let length = length.clamp(MIN_LENGTH, MAX_GENERATED_LENGTH);
    let specials = SPECIAL_CHARS.as_bytes();
    let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, specials].concat();

    let mut password = Vec::with_capacity(length);
    for set in [UPPERCASE, LOWERCASE, DIGITS, specials] {
        password.push(pick(rng, set));
    }
    while password.len() < length {
        password.push(pick(rng, &all));
    }

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password of {} characters", length);

    // Every class is ASCII, so each byte is one char.
    let password: String = password.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}
