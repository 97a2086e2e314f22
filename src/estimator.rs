//! Scorer adapter over the zxcvbn estimator.

use crate::dictionary;

/// What the estimator says about a single password.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Discrete score, 0 (weakest) to 4 (strongest).
    pub score: u8,
    /// Ordered remediation suggestions, possibly empty.
    pub suggestions: Vec<String>,
    /// Headline warning, if the estimator produced one.
    pub warning: Option<String>,
    /// Crack time for an unthrottled online attack at 10 guesses/second.
    pub crack_time_display: String,
    pub guesses_log10: f64,
}

/// A password-strength estimator.
///
/// Implementations must be deterministic for a fixed input.
pub trait Estimator {
    fn estimate(&self, password: &str) -> Estimate;
}

/// Default estimator: zxcvbn, fed the custom dictionary as user inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl Estimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str) -> Estimate {
        let entropy = dictionary::with_words(|words| zxcvbn::zxcvbn(password, words));

        let (suggestions, warning) = match entropy.feedback() {
            Some(feedback) => (
                feedback.suggestions().iter().map(|s| s.to_string()).collect(),
                feedback.warning().map(|w| w.to_string()),
            ),
            None => (Vec::new(), None),
        };

        Estimate {
            score: u8::from(entropy.score()),
            suggestions,
            warning,
            crack_time_display: entropy
                .crack_times()
                .online_no_throttling_10_per_second()
                .to_string(),
            guesses_log10: entropy.guesses_log10(),
        }
    }
}
