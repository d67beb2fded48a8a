//! Terminal output formatting.
//!
//! Human-readable output uses colored symbols and indented fields. In JSON
//! mode every emitted item is a single line `{"type": ..., "payload": ...}`
//! on stdout, so views can be piped into other tools.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// One JSON record per line instead of text.
    pub json: bool,
    pub quiet: bool,
    /// Count of `-v` flags.
    pub verbose: u8,
    pub color: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8, color: bool) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color,
        }
    }
}

static OUTPUT: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    *OUTPUT.get_or_init(Default::default).read()
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    *OUTPUT.get_or_init(Default::default).write() = config;
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

fn record(kind: &str, payload: Value) -> String {
    json!({ "type": kind, "payload": payload }).to_string()
}

/// Route one item either to a JSON record or to `human`, which is skipped in
/// quiet mode unless `always` is set.
fn emit(kind: &str, payload: impl FnOnce() -> Value, always: bool, human: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", record(kind, payload()));
    } else if always || !config.quiet {
        human();
    }
}

fn styled(value: impl Display, paint: impl FnOnce(&str) -> String) -> String {
    let value = value.to_string();
    let config = current();
    if config.json || !config.color {
        value
    } else {
        paint(&value)
    }
}

/// Print the view title with its tagline. Silent in JSON mode.
pub fn header(title: &str, tagline: &str) {
    let config = current();
    if config.json || config.quiet {
        return;
    }
    println!("{}", styled(title, |v| v.bold().red().to_string()));
    println!("{}", muted(tagline));
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        "field",
        || json!({ "label": label, "value": value }),
        false,
        || println!("  {:<14} {}", muted(label), value),
    );
}

pub fn success(message: &str) {
    emit("success", || json!({ "message": message }), false, || {
        println!("  {} {}", styled("✓", |v| v.green().to_string()), message);
    });
}

/// Warnings are printed even with `--quiet`.
pub fn warning(message: &str) {
    emit("warning", || json!({ "message": message }), true, || {
        println!("  {} {}", styled("⚠", |v| v.yellow().to_string()), message);
    });
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", record("error", json!({ "message": message })));
    } else {
        eprintln!("  {} {}", styled("×", |v| v.red().to_string()), message);
    }
}

/// Print an empty line, except in JSON or quiet mode.
pub fn blank() {
    let config = current();
    if !config.json && !config.quiet {
        println!();
    }
}

pub fn section(title: &str) {
    emit("section", || json!({ "title": title }), false, || {
        println!();
        println!("{}", styled(title, |v| v.bold().to_string()));
    });
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create and start a progress spinner.
///
/// Returns a hidden progress bar in JSON or quiet mode.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let config = current();
    if config.json || config.quiet {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.red} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Finish a spinner, leaving no trace on screen.
pub fn spinner_clear(pb: &indicatif::ProgressBar) {
    pb.finish_and_clear();
}

pub fn highlight(value: impl Display) -> String {
    styled(value, |v| v.cyan().to_string())
}

/// Yellow, for headline numbers.
pub fn accent(value: impl Display) -> String {
    styled(value, |v| v.yellow().to_string())
}

pub fn muted(value: impl Display) -> String {
    styled(value, |v| v.dimmed().to_string())
}

pub fn note(message: &str) {
    emit("note", || json!({ "message": message }), false, || {
        println!("  {}", muted(message));
    });
}

/// Print a hint with a `hint:` prefix.
pub fn hint(message: &str) {
    emit("hint", || json!({ "message": message }), false, || {
        println!("  {}: {}", highlight("hint"), muted(message));
    });
}

/// Print a block of text indented by two spaces.
pub fn lines(content: &str) {
    emit("lines", || json!({ "content": content }), false, || {
        content.lines().for_each(|line| println!("  {line}"));
    });
}

/// Emit one typed JSON record. No-op outside JSON mode.
pub fn json_record(kind: &str, payload: Value) {
    if is_json() {
        println!("{}", record(kind, payload));
    }
}

/// Clear the terminal before redrawing a live view.
pub fn clear_screen() {
    let config = current();
    if config.json || config.quiet {
        return;
    }
    print!("\x1B[2J\x1B[H");
}
