use proptest::prelude::*;
use proptest::test_runner::Config;
use pwd_rules::{
    generate_secure_password, validate_password, RuleId, StrengthCategory, MAX_SCORE,
};
use secrecy::{ExposeSecret, SecretString};

fn validate(pwd: &str) -> pwd_rules::ValidationReport {
    validate_password(&SecretString::new(pwd.to_string().into()))
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn short_passwords_are_invalid(pwd in ".{0,7}") {
        let report = validate(&pwd);
        prop_assert!(!report.is_valid);
        prop_assert!(report.failed_messages.iter().any(|m| m == RuleId::MinLength.message()));
    }

    #[test]
    fn passwords_without_digits_report_digit_rule(pwd in "[^0-9]*") {
        let report = validate(&pwd);
        prop_assert!(report.failed_messages.iter().any(|m| m == RuleId::HasDigit.message()));
    }

    #[test]
    fn valid_iff_no_failed_messages(pwd in "\\PC*") {
        let report = validate(&pwd);
        prop_assert_eq!(report.is_valid, report.failed_messages.is_empty());
        prop_assert!(report.score.value() <= MAX_SCORE);
        prop_assert_eq!(report.strength, StrengthCategory::from_score(report.score));
    }

    #[test]
    fn score_is_deterministic(pwd in "\\PC*") {
        prop_assert_eq!(validate(&pwd).score, validate(&pwd).score);
    }

    #[test]
    fn appending_never_lowers_score(pwd in "\\PC{8,40}", tail in "[a-z]{1,20}") {
        let longer = format!("{pwd}{tail}");
        prop_assert!(validate(&longer).score >= validate(&pwd).score);
    }

    #[test]
    fn generated_passwords_always_validate(len in 8usize..=64) {
        let pwd = generate_secure_password(len);
        prop_assert_eq!(pwd.expose_secret().chars().count(), len);
        let report = validate_password(&pwd);
        prop_assert!(report.is_valid, "{:?}", report.failed_messages);
    }

    #[test]
    fn degenerate_lengths_are_clamped(len in 0usize..8) {
        let pwd = generate_secure_password(len);
        prop_assert_eq!(pwd.expose_secret().len(), 8);
        prop_assert!(validate_password(&pwd).is_valid);
    }
}

#[test]
fn generated_passwords_differ() {
    let a = generate_secure_password(12);
    let b = generate_secure_password(12);
    assert_ne!(a.expose_secret(), b.expose_secret());
}

#[test]
fn concrete_scenarios() {
    let empty = validate("");
    assert!(!empty.is_valid);
    assert_eq!(empty.score.value(), 0);
    assert_eq!(empty.strength, StrengthCategory::VeryWeak);
    assert_eq!(empty.failed_messages.len(), 5);

    assert!(validate("Abcdef1!").is_valid);

    let lower = validate("alllowercase");
    let failed: Vec<&str> = lower
        .rules
        .iter()
        .filter(|r| !r.satisfied)
        .map(|r| r.message)
        .collect();
    assert_eq!(
        failed,
        vec![
            RuleId::HasUppercase.message(),
            RuleId::HasDigit.message(),
            RuleId::HasSpecialChar.message(),
        ]
    );
}
