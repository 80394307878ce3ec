//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{has_digit, has_lowercase, has_min_length, has_special, has_uppercase};
use crate::types::{PasswordChecks, PasswordEvaluation};

/// Evaluates password strength and returns the check results.
///
/// Every flag is recomputed from the input on each call; the score is the
/// count of passed checks and the label follows from the score. Total over
/// any input, never fails; the empty string yields all-false checks and
/// score 0.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let checks = PasswordChecks {
        length: has_min_length(password),
        uppercase: has_uppercase(password),
        lowercase: has_lowercase(password),
        number: has_digit(password),
        special: has_special(password),
    };

    let evaluation = PasswordEvaluation { checks };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score(),
        strength = %evaluation.strength(),
        "password evaluated"
    );

    evaluation
}

/// Async version that sends the evaluation result via channel.
///
/// Sleeps briefly before evaluating so a shell can cancel a stale request
/// when the user keeps typing; a cancelled token suppresses the send.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_tx_delivers_evaluation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tx_cancelled_token_suppresses_send() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_strength_tx(&secret("TestPass123!"), token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
