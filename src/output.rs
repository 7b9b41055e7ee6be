//! Console reporting for the brandmark CLI.
//!
//! Progress goes to stderr as a right-aligned verb followed by a message,
//! in the style of Cargo. Palette lines and completion scripts are the only
//! things written to stdout.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Column the verbs are right-aligned to.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb or a highlighted fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Progress,
    Info,
    Warning,
    Failure,
    Muted,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Info => "\x1b[36m",
            Tone::Warning => "\x1b[33m",
            Tone::Failure => "\x1b[31m",
            Tone::Muted => "\x1b[2m",
        }
    }
}

/// Writes status lines to stderr, colouring them only on a terminal.
pub struct Printer {
    colour: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            colour: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { colour: false }
    }

    /// Progress or completion, e.g. `Rendered social/x/header_1500x500.png`.
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Info, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warning, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Tone::Failure, verb, message);
    }

    /// De-emphasised text such as sizes and descriptions.
    pub fn dim(&self, text: &str) -> String {
        self.paint(Tone::Muted, text)
    }

    /// Highlighted paths.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(Tone::Info, text)
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if self.colour {
            format!("{}{text}{RESET}", tone.ansi())
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.colour {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// `plural(1, "asset", "assets")` gives "1 asset".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    let word = if n == 1 { singular } else { pluralized };
    format!("{n} {word}")
}

/// Path relative to the working directory when it lies beneath it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "asset", "assets"), "1 asset");
        assert_eq!(plural(0, "failure", "failures"), "0 failures");
        assert_eq!(plural(16, "asset", "assets"), "16 assets");
    }

    #[test]
    fn test_plain_lines_align_verbs() {
        let printer = Printer::plain();
        assert_eq!(
            printer.line(Tone::Progress, "Rendered", "logos/a.png"),
            "    Rendered logos/a.png"
        );
        assert_eq!(printer.dim("(800x800)"), "(800x800)");
        assert_eq!(printer.cyan("brand-assets"), "brand-assets");
    }

    #[test]
    fn test_coloured_lines_reset() {
        let printer = Printer { colour: true };
        let line = printer.line(Tone::Failure, "Failed", "x");
        assert!(line.starts_with("\x1b[1m\x1b[31m"));
        assert!(line.contains("Failed\x1b[0m x"));
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/brand-assets/logos");
        assert_eq!(display_path(p), "/nonexistent/brand-assets/logos");
    }
}
