//! Warning, status and prompt messages for CLI output.

use std::io::Write;

use crate::exits::stdin_is_tty;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Writes CLI messages to stderr, honouring quiet mode.
#[derive(Debug, Clone, Copy)]
pub struct Prompts {
    quiet: bool,
}

impl Prompts {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// True when prompts would block or were silenced.
    fn skip_prompt(&self) -> bool {
        self.quiet || !stdin_is_tty()
    }

    /// Yellow warning - suppressed in quiet mode.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{YELLOW}{msg}{RESET}");
        }
    }

    /// Red error - always shown.
    pub fn error(&self, msg: &str) {
        eprintln!("{RED}{msg}{RESET}");
    }

    pub fn entropy(&self, bits: f64, strength: &str, pool_size: usize) {
        if !self.quiet {
            eprintln!("Entropy: {bits:.1} bits ({strength}) from a pool of {pool_size}");
        }
    }

    pub fn clipboard_copied(&self, count: usize) {
        if !self.quiet {
            eprintln!("*** {count} password(s) copied to clipboard ***");
        }
    }

    /// Ask whether to print instead when the clipboard is unavailable.
    /// Non-interactive or quiet runs fall back silently.
    pub fn clipboard_fallback(&self, err: &str) -> bool {
        if self.skip_prompt() {
            return true;
        }

        self.warn(err);
        eprint!("Print to terminal instead? [Y/n]: ");
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return true;
        }
        matches!(input.trim().to_lowercase().as_str(), "" | "y" | "yes")
    }
}
