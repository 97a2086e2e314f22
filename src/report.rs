//! Password report - the merged result handed to display surfaces.

use serde::Serialize;

use crate::composition::Composition;
use crate::estimator::Estimate;
use crate::sections::composition_warnings;
use crate::strength::{PasswordStrength, progress_percent};

/// Immutable evaluation of one password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordReport {
    pub strength: PasswordStrength,
    pub score: u8,
    pub feedback: Vec<String>,
    pub warning: Option<String>,
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub crack_time_display: String,
    pub guesses_log10: f64,
}

impl PasswordReport {
    /// Merges an estimate and a composition analysis.
    pub fn assemble(estimate: Estimate, composition: Composition) -> Self {
        Self {
            strength: PasswordStrength::from_score(estimate.score),
            score: estimate.score,
            feedback: estimate.suggestions,
            warning: estimate.warning,
            length: composition.length,
            has_upper: composition.has_upper,
            has_lower: composition.has_lower,
            has_digit: composition.has_digit,
            has_special: composition.has_special,
            crack_time_display: estimate.crack_time_display,
            guesses_log10: estimate.guesses_log10,
        }
    }

    pub fn composition(&self) -> Composition {
        Composition {
            length: self.length,
            has_upper: self.has_upper,
            has_lower: self.has_lower,
            has_digit: self.has_digit,
            has_special: self.has_special,
        }
    }

    /// Progress meter value, `(score + 1) * 20`.
    pub fn progress(&self) -> u8 {
        progress_percent(self.score)
    }

    /// Composition warnings, in display order.
    pub fn warnings(&self) -> Vec<&'static str> {
        composition_warnings(&self.composition())
    }
}
