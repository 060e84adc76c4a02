use clap::Parser;

use crate::entropy::Source;
use crate::pass::catalog::DEFAULT_LENGTH;
use crate::settings::Settings;

#[derive(Debug, Parser)]
#[command(
    name = "genpass",
    version,
    about = "Password generator with selectable character classes",
    long_about = r#"
Generates passwords by drawing characters uniformly from the pool of enabled
character classes: symbols, numbers, lowercase, uppercase and, optionally,
emoji.

Run without arguments (or with -i) to open the interactive form.

Examples:
  genpass -l 20 -n 3        three 20-character passwords
  genpass --no-symbols      alphanumeric only
  genpass -e -l 5 -b        five emoji, copied to the clipboard
"#
)]
pub struct CliFlags {
    /// Characters per password (any positive integer)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH as i64, allow_negative_numbers = true)]
    pub length: i64,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Leave out symbols (!"#$%&'()*+,-./:;<=>?@)
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Include emoji
    #[arg(short, long)]
    pub emoji: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress everything except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive form with these settings
    #[arg(short, long)]
    pub interactive: bool,

    /// Draw from the operating system RNG
    #[arg(short = 'u', long)]
    pub os_rng: bool,

    /// Seed for reproducible output
    #[arg(long, conflicts_with = "os_rng")]
    pub seed: Option<u64>,

    /// Print the entropy estimate to stderr
    #[arg(long)]
    pub entropy: bool,
}

impl CliFlags {
    pub fn source(&self) -> Source {
        match (self.seed, self.os_rng) {
            (Some(seed), _) => Source::Seeded(seed),
            (None, true) => Source::Os,
            (None, false) => Source::Thread,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            pass_length: self.length,
            include_symbols: !self.no_symbols,
            include_numbers: !self.no_numbers,
            include_lowercase: !self.no_lowercase,
            include_uppercase: !self.no_uppercase,
            include_emoji: self.emoji,
            number_of_passwords: self.number.max(1),
            to_clipboard: self.clipboard,
            show_entropy: self.entropy,
            source: self.source(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::pass::{CharacterClass, GenerationRequest};

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("genpass").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_valid() {
        CliFlags::command().debug_assert();
    }

    #[test]
    fn defaults_match_form_defaults() {
        let flags = parse(&[]);
        assert_eq!(flags.settings(), Settings::default());
        assert_eq!(flags.settings().request(), GenerationRequest::default());
    }

    #[test]
    fn class_flags() {
        let settings = parse(&["--no-symbols", "--no-uppercase", "-e", "-l", "5"]).settings();
        let req = settings.request();
        assert_eq!(req.length, 5);
        assert_eq!(
            req.classes.into_iter().collect::<Vec<_>>(),
            [CharacterClass::Numbers, CharacterClass::Lowercase, CharacterClass::Emoji]
        );
    }

    #[test]
    fn negative_length_reaches_the_generator() {
        assert_eq!(parse(&["-l", "-1"]).length, -1);
        assert_eq!(parse(&["--length", "0"]).length, 0);
    }

    #[test]
    fn zero_count_becomes_one() {
        assert_eq!(parse(&["-n", "0"]).settings().number_of_passwords, 1);
        assert_eq!(parse(&["-n", "7"]).settings().number_of_passwords, 7);
    }

    #[test]
    fn sources() {
        assert_eq!(parse(&[]).source(), Source::Thread);
        assert_eq!(parse(&["-u"]).source(), Source::Os);
        assert_eq!(parse(&["--seed", "9"]).source(), Source::Seeded(9));
        assert!(CliFlags::try_parse_from(["genpass", "-u", "--seed", "9"]).is_err());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(CliFlags::try_parse_from(["genpass", "--bogus"]).is_err());
        assert!(CliFlags::try_parse_from(["genpass", "-l", "ten"]).is_err());
    }
}
