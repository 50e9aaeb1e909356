//! Password validator - runs the rules and computes score and strength.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{check_rules, RuleResult, MIN_LENGTH};
use crate::strength::{PasswordScore, StrengthCategory};

/// Points granted per satisfied rule.
const RULE_POINTS: i64 = 15;

/// Cap on the bonus for characters beyond [`MIN_LENGTH`].
const LENGTH_BONUS_CAP: i64 = 25;

/// Delay before live feedback is computed.
#[cfg(feature = "async")]
pub const FEEDBACK_DEBOUNCE: Duration = Duration::from_millis(300);

/// Result of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Messages of unsatisfied rules, in rule order.
    #[cfg_attr(feature = "serde", serde(rename = "errors"))]
    pub failed_messages: Vec<String>,
    pub rules: Vec<RuleResult>,
    pub score: PasswordScore,
    pub strength: StrengthCategory,
}

/// Validates a password against every rule.
///
/// Never fails: an empty candidate yields an invalid report with all five
/// messages, score 0 and [`StrengthCategory::VeryWeak`].
pub fn validate_password(password: &SecretString) -> ValidationReport {
    let pwd = password.expose_secret();
    let rules = check_rules(pwd);

    let failed_messages: Vec<String> = rules
        .iter()
        .filter(|r| !r.satisfied)
        .map(|r| r.message.to_string())
        .collect();

    let satisfied = rules.iter().filter(|r| r.satisfied).count();
    let score = compute_score(satisfied, pwd.chars().count());

    ValidationReport {
        is_valid: failed_messages.is_empty(),
        failed_messages,
        rules,
        score,
        strength: score.strength(),
    }
}

/// 15 points per satisfied rule plus one per character past the minimum
/// (at most 25), clamped to 100.
fn compute_score(satisfied_rules: usize, length: usize) -> PasswordScore {
    let base = satisfied_rules as i64 * RULE_POINTS;
    let extra = length.saturating_sub(MIN_LENGTH) as i64;
    PasswordScore::new(base + extra.min(LENGTH_BONUS_CAP))
}

/// Live feedback for forms: waits [`FEEDBACK_DEBOUNCE`], validates, and sends
/// the report on `tx`.
///
/// Nothing is sent if `token` is cancelled first, so a newer keystroke can
/// supersede a pending evaluation.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("password feedback scheduled");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password feedback cancelled before evaluation");
            return;
        }
        _ = tokio::time::sleep(FEEDBACK_DEBOUNCE) => {}
    }

    let report = validate_password(password);
    if token.is_cancelled() {
        return;
    }

    if let Err(err) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation report: {}", err);
        #[cfg(not(feature = "tracing"))]
        let _ = err;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        validate_password_tx(&pwd, token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert!(report.is_valid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        validate_password_tx(&pwd, token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("TestPass123!".to_string().into());
        validate_password_tx(&pwd, CancellationToken::new(), tx).await;
    }

    fn spawn_feedback(
        pwd: &str,
        token: &CancellationToken,
    ) -> (tokio::task::JoinHandle<()>, mpsc::Receiver<ValidationReport>) {
        let (tx, rx) = mpsc::channel(1);
        let pwd = SecretString::new(pwd.to_string().into());
        let token = token.clone();
        let handle = tokio::spawn(async move {
            validate_password_tx(&pwd, token, tx).await;
        });
        (handle, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx_waits_for_debounce() {
        let token = CancellationToken::new();
        let (handle, mut rx) = spawn_feedback("TestPass123!", &token);

        tokio::task::yield_now().await;
        tokio::time::advance(FEEDBACK_DEBOUNCE - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err(), "report sent before debounce elapsed");

        tokio::time::advance(Duration::from_millis(1)).await;
        handle.await.expect("feedback task panicked");
        let report = rx.recv().await.expect("Should receive report");
        assert!(report.is_valid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_validate_password_tx_cancelled_during_debounce() {
        let token = CancellationToken::new();
        let (handle, mut rx) = spawn_feedback("TestPass123!", &token);

        tokio::task::yield_now().await;
        tokio::time::advance(FEEDBACK_DEBOUNCE - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());

        token.cancel();
        handle.await.expect("feedback task panicked");
        assert!(rx.recv().await.is_none());
    }
}
