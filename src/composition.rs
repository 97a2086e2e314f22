//! Composition analysis - length and character-class membership.

use serde::Serialize;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Symbols counted as special characters.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Length and character classes found in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl Composition {
    /// Number of character classes present (0-4).
    pub fn class_count(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Any Unicode decimal digit (general category Nd), not only ASCII `0-9`.
fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Inspects `password` for length and the four character classes.
///
/// Length counts chars, not bytes.
pub fn analyze_composition(password: &str) -> Composition {
    password.chars().fold(Composition::default(), |mut acc, c| {
        acc.length += 1;
        acc.has_upper |= c.is_uppercase();
        acc.has_lower |= c.is_lowercase();
        acc.has_digit |= is_decimal_digit(c);
        acc.has_special |= is_special(c);
        acc
    })
}
