//! Display surfaces - render a [`PasswordReport`] for a user.

use std::io::Write;
use thiserror::Error;

use crate::report::PasswordReport;
use crate::sections::MIN_LENGTH;

const BAR_WIDTH: usize = 20;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Something that can show a report to the user.
pub trait DisplaySurface {
    fn render(&mut self, report: &PasswordReport) -> Result<(), RenderError>;
}

/// Human-readable text surface.
#[derive(Debug)]
pub struct TextSurface<W> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn mark(present: bool) -> &'static str {
    if present { "✔" } else { "✖" }
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

impl<W: Write> DisplaySurface for TextSurface<W> {
    fn render(&mut self, report: &PasswordReport) -> Result<(), RenderError> {
        let out = &mut self.out;

        writeln!(out, "Strength: {}", report.strength)?;
        writeln!(out, "{} {}%", progress_bar(report.progress()), report.progress())?;

        writeln!(out, "Password Analysis:")?;
        let verdict = if report.length >= MIN_LENGTH { "Good" } else { "Too short" };
        writeln!(out, "  Length: {} ({})", report.length, verdict)?;
        writeln!(
            out,
            "  Uppercase: {}  Lowercase: {}  Digit: {}  Special Char: {}",
            mark(report.has_upper),
            mark(report.has_lower),
            mark(report.has_digit),
            mark(report.has_special)
        )?;

        if let Some(warning) = &report.warning {
            writeln!(out, "Warning: {warning}")?;
        }

        if !report.feedback.is_empty() {
            writeln!(out, "Suggestions:")?;
            for suggestion in &report.feedback {
                writeln!(out, "- {suggestion}")?;
            }
        }

        for warning in report.warnings() {
            writeln!(out, "! {warning}")?;
        }

        writeln!(out, "Estimated time to crack: {}", report.crack_time_display)?;
        out.flush()?;
        Ok(())
    }
}

/// Writes each report as one line of JSON, with the derived progress and
/// warnings included.
#[derive(Debug)]
pub struct JsonSurface<W> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(serde::Serialize)]
struct JsonView<'a> {
    #[serde(flatten)]
    report: &'a PasswordReport,
    progress: u8,
    warnings: Vec<&'static str>,
}

impl<W: Write> DisplaySurface for JsonSurface<W> {
    fn render(&mut self, report: &PasswordReport) -> Result<(), RenderError> {
        let view = JsonView {
            report,
            progress: report.progress(),
            warnings: report.warnings(),
        };
        serde_json::to_writer(&mut self.out, &view)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::analyze_composition;
    use crate::estimator::Estimate;

    fn report(password: &str, score: u8, suggestions: &[&str]) -> PasswordReport {
        PasswordReport::assemble(
            Estimate {
                score,
                suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
                warning: None,
                crack_time_display: "2 minutes".to_string(),
                guesses_log10: 3.0,
            },
            analyze_composition(password),
        )
    }

    fn render_text(report: &PasswordReport) -> String {
        let mut surface = TextSurface::new(Vec::new());
        surface.render(report).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(20), "[####----------------]");
        assert_eq!(progress_bar(100), "[####################]");
    }

    #[test]
    fn test_text_surface_weak_password() {
        let text = render_text(&report("abc", 0, &["Add another word or two."]));

        assert!(text.starts_with("Strength: Very Weak\n"));
        assert!(text.contains("20%"));
        assert!(text.contains("Length: 3 (Too short)"));
        assert!(text.contains("Uppercase: ✖  Lowercase: ✔  Digit: ✖  Special Char: ✖"));
        assert!(text.contains("Suggestions:\n- Add another word or two.\n"));
        assert!(text.contains("! Your password is too short. Use at least 8 characters."));
        assert!(text.contains("! Add uppercase letters to strengthen your password."));
        assert!(text.contains("! Add special characters to strengthen your password."));
        assert!(text.ends_with("Estimated time to crack: 2 minutes\n"));
    }

    #[test]
    fn test_text_surface_strong_password() {
        let text = render_text(&report("P@ssw0rd123!xyz", 4, &[]));

        assert!(text.starts_with("Strength: Very Strong\n"));
        assert!(text.contains("100%"));
        assert!(text.contains("Length: 15 (Good)"));
        assert!(!text.contains("Suggestions:"));
        assert!(!text.contains("! "));
    }

    #[test]
    fn test_text_surface_estimator_warning() {
        let mut r = report("password", 0, &[]);
        r.warning = Some("This is a top-10 common password.".to_string());
        let text = render_text(&r);
        assert!(text.contains("Warning: This is a top-10 common password.\n"));
    }

    #[test]
    fn test_json_surface() {
        let mut surface = JsonSurface::new(Vec::new());
        surface.render(&report("abcdefgh", 2, &["Use a longer keyboard pattern."])).unwrap();
        let out = String::from_utf8(surface.into_inner()).unwrap();

        assert_eq!(out.lines().count(), 1);
        let json: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(json["strength"], "moderate");
        assert_eq!(json["score"], 2);
        assert_eq!(json["progress"], 60);
        assert_eq!(json["length"], 8);
        assert_eq!(json["warnings"].as_array().unwrap().len(), 2);
        assert_eq!(json["feedback"][0], "Use a longer keyboard pattern.");
    }
}
