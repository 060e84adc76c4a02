//! Password generation settings.

use crate::entropy::Source;
use crate::pass::catalog::DEFAULT_LENGTH;
use crate::pass::{CharacterClass, GenerationRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: i64,
    pub include_symbols: bool,
    pub include_numbers: bool,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_emoji: bool,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub show_entropy: bool,
    pub source: Source,
}

impl Settings {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Symbols => self.include_symbols,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Emoji => self.include_emoji,
        }
    }

    pub fn set_enabled(&mut self, class: CharacterClass, on: bool) {
        let flag = match class {
            CharacterClass::Symbols => &mut self.include_symbols,
            CharacterClass::Numbers => &mut self.include_numbers,
            CharacterClass::Lowercase => &mut self.include_lowercase,
            CharacterClass::Uppercase => &mut self.include_uppercase,
            CharacterClass::Emoji => &mut self.include_emoji,
        };
        *flag = on;
    }

    /// Snapshot the current length and classes as a request.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.pass_length,
            CharacterClass::ALL
                .into_iter()
                .filter(|&c| self.is_enabled(c)),
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH as i64,
            include_symbols: CharacterClass::Symbols.enabled_by_default(),
            include_numbers: CharacterClass::Numbers.enabled_by_default(),
            include_lowercase: CharacterClass::Lowercase.enabled_by_default(),
            include_uppercase: CharacterClass::Uppercase.enabled_by_default(),
            include_emoji: CharacterClass::Emoji.enabled_by_default(),
            number_of_passwords: 1,
            to_clipboard: false,
            show_entropy: false,
            source: Source::Thread,
        }
    }
}
