//! Composition warning sections
//!
//! Each section inspects one aspect of a password's composition and
//! returns a warning when that aspect falls short.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_section};
pub use variety::{special_section, uppercase_section};

use crate::composition::Composition;

/// Result type for section checks.
/// - `Some(warning)` - Section failed with a warning
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;

/// Runs every section in display order and collects the warnings.
pub fn composition_warnings(composition: &Composition) -> Vec<&'static str> {
    let sections: [fn(&Composition) -> SectionResult; 3] =
        [length_section, uppercase_section, special_section];

    sections
        .iter()
        .filter_map(|section| section(composition))
        .collect()
}
