//! Character variety sections - uppercase and special characters.
//!
//! Lowercase letters and digits are shown as indicators but never warned about.

use super::SectionResult;
use crate::composition::Composition;

pub fn uppercase_section(composition: &Composition) -> SectionResult {
    if !composition.has_upper {
        return Some("Add uppercase letters to strengthen your password.");
    }
    None
}

pub fn special_section(composition: &Composition) -> SectionResult {
    if !composition.has_special {
        return Some("Add special characters to strengthen your password.");
    }
    None
}
