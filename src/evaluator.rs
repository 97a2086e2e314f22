//! Password evaluator - runs the estimator and composition analysis and
//! merges them into a [`PasswordReport`].

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::composition::analyze_composition;
use crate::estimator::{Estimator, ZxcvbnEstimator};
use crate::report::PasswordReport;

/// Delay before an async evaluation starts, so that fast typing only
/// evaluates the last keystroke.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates password strength with the default zxcvbn estimator.
pub fn evaluate_password(password: &SecretString) -> PasswordReport {
    evaluate_password_with(&ZxcvbnEstimator, password)
}

/// Evaluates password strength with a caller-supplied estimator.
///
/// The estimator is called exactly once. Anything it panics with is not
/// caught here.
pub fn evaluate_password_with<E: Estimator + ?Sized>(
    estimator: &E,
    password: &SecretString,
) -> PasswordReport {
    let pwd = password.expose_secret();

    let estimate = estimator.estimate(pwd);
    let composition = analyze_composition(pwd);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = estimate.score,
        length = composition.length,
        classes = composition.class_count(),
        "password evaluated"
    );

    PasswordReport::assemble(estimate, composition)
}

/// Async version that debounces, then sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = evaluate_password(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
