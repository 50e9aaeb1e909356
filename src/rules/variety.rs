//! Character variety rules - uppercase, lowercase, digits, special chars.

/// Characters accepted by the special-character rule.
///
/// The generator draws from the same set, so anything it produces passes.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// At least one `A`-`Z`.
pub fn uppercase_rule(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_uppercase())
}

/// At least one `a`-`z`.
pub fn lowercase_rule(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_lowercase())
}

/// At least one `0`-`9`.
pub fn digit_rule(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_digit())
}

/// At least one character from [`SPECIAL_CHARS`].
pub fn special_char_rule(candidate: &str) -> bool {
    candidate.chars().any(|c| SPECIAL_CHARS.contains(c))
}
