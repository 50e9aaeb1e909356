//! Password rule validation library
//!
//! Validates passwords against a fixed set of mandatory rules, scores them,
//! maps the score to a strength category with display tokens, and generates
//! random passwords that always pass validation.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live feedback with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for reports (camelCase field names)
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_LIST_PATH`: Custom path to the common password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{generate_secure_password, validate_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdef1!".to_string().into());
//! let report = validate_password(&password);
//! assert!(report.is_valid);
//! println!("{} ({})", report.strength.label(), report.strength.color());
//!
//! let generated = generate_secure_password(16);
//! assert!(validate_password(&generated).is_valid);
//! ```

mod common;
mod evaluator;
mod form;
mod generator;
mod rules;
mod strength;

// Public API
pub use common::{
    common_list_path, common_password_count, init_common_passwords,
    init_common_passwords_from_path, is_common_password, CommonListError, COMMON_LIST_ENV,
};
pub use evaluator::{validate_password, ValidationReport};
pub use form::{
    validate_password_form, FieldErrors, PasswordField, COMMON_PASSWORD_MESSAGE,
    CONFIRMATION_MISMATCH_MESSAGE, CONFIRMATION_MISSING_MESSAGE,
};
pub use generator::{
    generate_default_password, generate_secure_password, generate_secure_password_with,
    DEFAULT_GENERATED_LENGTH, MAX_GENERATED_LENGTH,
};
pub use rules::{check_rules, RuleCheck, RuleId, RuleResult, MIN_LENGTH, RULES, SPECIAL_CHARS};
pub use strength::{
    strength_color, strength_label, ParseStrengthError, PasswordScore, StrengthCategory,
    MAX_SCORE,
};

#[cfg(feature = "async")]
pub use evaluator::{validate_password_tx, FEEDBACK_DEBOUNCE};
