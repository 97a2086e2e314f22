//! Strength classification - maps an estimator score to a label.

use serde::Serialize;
use std::fmt;

/// Highest score the estimator can produce.
pub const MAX_SCORE: u8 = 4;

/// Strength label derived from an estimator score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Fixed score table. Anything outside `0..=4` falls back to `VeryWeak`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Moderate,
            3 => PasswordStrength::Strong,
            4 => PasswordStrength::VeryStrong,
            _ => PasswordStrength::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress meter value in percent: `(score + 1) * 20`.
///
/// Scores above [`MAX_SCORE`] are clamped so the meter never exceeds 100.
pub fn progress_percent(score: u8) -> u8 {
    (score.min(MAX_SCORE) + 1) * 20
}
