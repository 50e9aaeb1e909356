//! Password rules
//!
//! Each rule is a single boolean predicate over the candidate. The order of
//! [`RULES`] is the evaluation order and therefore the order of failure messages.

mod length;
mod variety;

pub use length::{min_length_rule, MIN_LENGTH};
pub use variety::{digit_rule, lowercase_rule, special_char_rule, uppercase_rule, SPECIAL_CHARS};

/// Identifies one of the mandatory password rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RuleId {
    MinLength,
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecialChar,
}

impl RuleId {
    /// Message shown to the user when the rule is not satisfied.
    pub fn message(self) -> &'static str {
        match self {
            RuleId::MinLength => "Password must be at least 8 characters long",
            RuleId::HasUppercase => "Password must contain at least one uppercase letter",
            RuleId::HasLowercase => "Password must contain at least one lowercase letter",
            RuleId::HasDigit => "Password must contain at least one number",
            RuleId::HasSpecialChar => "Password must contain at least one special character",
        }
    }
}

/// Outcome of a single rule against a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RuleResult {
    pub rule_id: RuleId,
    pub satisfied: bool,
    pub message: &'static str,
}

/// Predicate signature shared by every rule.
pub type RuleCheck = fn(&str) -> bool;

/// Rule set in evaluation order.
pub const RULES: [(RuleId, RuleCheck); 5] = [
    (RuleId::MinLength, min_length_rule),
    (RuleId::HasUppercase, uppercase_rule),
    (RuleId::HasLowercase, lowercase_rule),
    (RuleId::HasDigit, digit_rule),
    (RuleId::HasSpecialChar, special_char_rule),
];

/// Runs every rule against `candidate`, in order.
pub fn check_rules(candidate: &str) -> Vec<RuleResult> {
    RULES
        .iter()
        .map(|&(rule_id, check)| RuleResult {
            rule_id,
            satisfied: check(candidate),
            message: rule_id.message(),
        })
        .collect()
}
