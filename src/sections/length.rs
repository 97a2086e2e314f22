//! Length section - checks password minimum length.

use super::SectionResult;
use crate::composition::Composition;

pub const MIN_LENGTH: usize = 8;

/// Warns when the password is shorter than [`MIN_LENGTH`] characters.
pub fn length_section(composition: &Composition) -> SectionResult {
    if composition.length < MIN_LENGTH {
        return Some("Your password is too short. Use at least 8 characters.");
    }
    None
}
