use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use pwd_meter::{DisplaySurface, JsonSurface, TextSurface, evaluate_password};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

/// Password strength meter. Reads one password per line from stdin.
#[derive(Parser, Debug)]
#[command(name = "pwd-meter", version, about)]
struct Cli {
    /// Emit one JSON object per password instead of text
    #[arg(long)]
    json: bool,

    /// Extra words to penalize, one per line (overrides PWD_DICTIONARY_PATH)
    #[arg(long)]
    dictionary: Option<PathBuf>,
}

/// Loads the custom dictionary. An explicit path must load; the
/// environment/default path is optional.
fn load_dictionary(path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            pwd_meter::init_dictionary_from_path(path)
                .with_context(|| format!("loading dictionary {}", path.display()))?;
        }
        None => {
            if let Err(e) = pwd_meter::init_dictionary() {
                tracing::debug!("no custom dictionary: {}", e);
            }
        }
    }
    Ok(())
}

fn surface_for<'a, W: std::io::Write + 'a>(json: bool, out: W) -> Box<dyn DisplaySurface + 'a> {
    if json {
        Box::new(JsonSurface::new(out))
    } else {
        Box::new(TextSurface::new(out))
    }
}

/// Evaluates every non-empty line of `input` and renders it on `surface`.
///
/// Lines that are not valid UTF-8 are skipped with a warning. Returns the
/// number of reports rendered.
fn run<R: BufRead>(mut input: R, surface: &mut dyn DisplaySurface) -> anyhow::Result<usize> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut rendered = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("reading stdin")? == 0 {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if buf.is_empty() {
            continue;
        }

        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(_) => {
                tracing::warn!("skipping line {}: not valid UTF-8", line_no);
                continue;
            }
        };

        let password = SecretString::new(line.into());
        surface.render(&evaluate_password(&password))?;
        rendered += 1;
    }

    Ok(rendered)
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with rendered reports
    let filter = EnvFilter::try_from_env("PWD_METER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    load_dictionary(cli.dictionary.as_deref())?;

    let mut surface = surface_for(cli.json, std::io::stdout().lock());
    let rendered = run(std::io::stdin().lock(), surface.as_mut())?;
    tracing::debug!("rendered {} reports", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn run_to_string(input: &[u8], json: bool) -> (usize, String) {
        let mut out = Vec::new();
        let rendered = {
            let mut surface = surface_for(json, &mut out);
            run(Cursor::new(input.to_vec()), surface.as_mut()).expect("run")
        };
        (rendered, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn test_run_skips_empty_lines() {
        let (rendered, out) = run_to_string(b"abc\n\nP@ssw0rd123\n", true);
        assert_eq!(rendered, 2);
        assert_eq!(out.lines().count(), 2);

        let lengths: Vec<u64> = out
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["length"].as_u64().unwrap())
            .collect();
        assert_eq!(lengths, vec![3, 11]);
    }

    #[test]
    fn test_run_handles_crlf_and_missing_final_newline() {
        let (rendered, out) = run_to_string(b"abc\r\nxyz", true);
        assert_eq!(rendered, 2);
        for line in out.lines() {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["length"], 3);
        }
    }

    #[test]
    fn test_run_skips_invalid_utf8_and_continues() {
        let (rendered, out) = run_to_string(b"ab\xffc\nabc\n", true);
        assert_eq!(rendered, 1);
        let json: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(json["length"], 3);
    }

    #[test]
    fn test_text_surface_selected_without_json() {
        let (rendered, out) = run_to_string(b"abc\n", false);
        assert_eq!(rendered, 1);
        assert!(out.starts_with("Strength: "));
        assert!(serde_json::from_str::<serde_json::Value>(out.lines().next().unwrap()).is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["pwd-meter", "--json", "--dictionary", "/tmp/words.txt"]);
        assert!(cli.json);
        assert_eq!(cli.dictionary, Some(PathBuf::from("/tmp/words.txt")));

        let cli = Cli::parse_from(["pwd-meter"]);
        assert!(!cli.json);
        assert!(cli.dictionary.is_none());
    }

    #[test]
    #[serial]
    fn test_dictionary_flag_overrides_env() {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::set_var("PWD_DICTIONARY_PATH", "/nonexistent/path/dictionary.txt"); }

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "zorblaxquintar").expect("Failed to write");

        load_dictionary(Some(temp_file.path())).expect("explicit dictionary loads");
        assert_eq!(
            pwd_meter::get_dictionary(),
            Some(vec!["zorblaxquintar".to_string()])
        );

        // SAFETY: see above
        unsafe { std::env::remove_var("PWD_DICTIONARY_PATH"); }
    }

    #[test]
    #[serial]
    fn test_missing_env_dictionary_is_not_fatal() {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::set_var("PWD_DICTIONARY_PATH", "/nonexistent/path/dictionary.txt"); }
        assert!(load_dictionary(None).is_ok());
        // SAFETY: see above
        unsafe { std::env::remove_var("PWD_DICTIONARY_PATH"); }
    }
}
