//! CLI context - bundles settings and message output.

use std::io::{self, Write};

use clap::Parser;
use log::{debug, info};
use rand::RngCore;

use super::{CliFlags, Prompts};
use crate::entropy;
use crate::error::Result;
use crate::pass::output::{Clipboard, write_lines};
use crate::pass::{Password, PasswordGenerator};
use crate::settings::Settings;
use crate::tui;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub prompts: Prompts,
    interactive: bool,
}

impl Context {
    /// Parse command-line arguments. Help and version requests come back as
    /// a `clap::Error` whose `exit()` prints them.
    pub fn new(args: Vec<String>) -> std::result::Result<Self, clap::Error> {
        let flags = CliFlags::try_parse_from(args)?;
        debug!("flags: {flags:?}");
        Ok(Self {
            settings: flags.settings(),
            prompts: Prompts::new(flags.quiet),
            interactive: flags.interactive,
        })
    }

    pub fn run(&self) -> Result<()> {
        if self.interactive {
            return tui::run(&self.settings);
        }
        let stdout = io::stdout();
        self.deliver(&mut stdout.lock())?;
        self.report_entropy();
        Ok(())
    }

    fn generator(&self) -> PasswordGenerator<Box<dyn RngCore>> {
        info!(
            "generating {} password(s) with {}",
            self.settings.number_of_passwords,
            self.settings.source.name()
        );
        PasswordGenerator::new(self.settings.source.rng())
    }

    /// Generate the configured number of passwords.
    pub fn generate(&self) -> Result<Vec<Password>> {
        let request = self.settings.request();
        Ok(self
            .generator()
            .generate_batch(&request, self.settings.number_of_passwords)?)
    }

    fn report_entropy(&self) {
        if !self.settings.show_entropy {
            return;
        }
        let request = self.settings.request();
        let pool = request.pool_size();
        let bits = entropy::estimate_bits(usize::try_from(request.length).unwrap_or(0), pool);
        self.prompts.entropy(bits, entropy::strength(bits), pool);
    }

    /// Print passwords to `out` one at a time, or collect them for the
    /// clipboard.
    pub fn deliver<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.settings.to_clipboard {
            let request = self.settings.request();
            return self.generator().for_each(
                &request,
                self.settings.number_of_passwords,
                |pass| write_lines(&mut *out, std::slice::from_ref(&pass)),
            );
        }
        let passwords = self.generate()?;
        match Clipboard::open().and_then(|mut clipboard| clipboard.copy_all(&passwords)) {
            Ok(()) => {
                self.prompts.clipboard_copied(passwords.len());
                Ok(())
            }
            Err(e) if self.prompts.clipboard_fallback(&e.to_string()) => write_lines(out, &passwords),
            Err(e) => Err(e),
        }
    }
}
