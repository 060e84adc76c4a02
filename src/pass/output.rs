//! Delivering passwords to the terminal or the system clipboard.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, warn};
use zeroize::Zeroize;

use super::Password;
use crate::error::{Error, Result};

/// Write passwords one per line.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[Password]) -> Result<()> {
    for pass in passwords {
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Join passwords into one newline-separated clipboard payload.
pub fn join(passwords: &[Password]) -> String {
    let mut joined = String::new();
    for (i, pass) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(pass.as_str());
    }
    joined
}

/// System clipboard handle.
pub struct Clipboard {
    ctx: ClipboardContext,
}

impl Clipboard {
    pub fn open() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| {
            warn!("clipboard unavailable: {e}");
            Error::Clipboard(e.to_string())
        })?;
        Ok(Self { ctx })
    }

    /// Place `text` on the clipboard.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Some providers hand back a fresh copy; wipe it.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }

    pub fn copy_all(&mut self, passwords: &[Password]) -> Result<()> {
        let mut joined = join(passwords);
        let result = self.copy(&joined);
        joined.zeroize();
        result
    }
}
