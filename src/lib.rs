//! Password strength meter library
//!
//! Scores passwords with the zxcvbn estimator, inspects their composition
//! (length and character classes) and merges both into a [`PasswordReport`]
//! that a [`DisplaySurface`] can render.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-meter` binary
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the extra-words dictionary
//!   (default: `./assets/dictionary.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{evaluate_password, DisplaySurface, TextSurface};
//! use secrecy::SecretString;
//!
//! // Optional: penalize site-specific words
//! let _ = pwd_meter::init_dictionary();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password(&password);
//!
//! println!("Strength: {} ({}%)", report.strength, report.progress());
//! TextSurface::new(std::io::stdout()).render(&report).expect("render");
//! ```

mod composition;
mod dictionary;
mod display;
mod estimator;
mod evaluator;
mod report;
mod sections;
mod strength;

// Public API
pub use composition::{Composition, SPECIAL_CHARS, analyze_composition};
pub use dictionary::{
    DictionaryError, dictionary_path, get_dictionary, init_dictionary, init_dictionary_from_path,
};
pub use display::{DisplaySurface, JsonSurface, RenderError, TextSurface};
pub use estimator::{Estimate, Estimator, ZxcvbnEstimator};
pub use evaluator::{evaluate_password, evaluate_password_with};
pub use report::PasswordReport;
pub use sections::MIN_LENGTH;
pub use strength::{MAX_SCORE, PasswordStrength, progress_percent};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_tx};
