//! Length rule - checks password minimum length.

/// Minimum number of characters a password must have.
pub const MIN_LENGTH: usize = 8;

/// Returns `true` if the candidate has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in characters, so `"пароль12"` is 8 long even though it
/// takes more bytes.
pub fn min_length_rule(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_LENGTH
}
