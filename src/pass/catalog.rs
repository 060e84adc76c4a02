//! Character classes, length tiers and the form control catalog.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

// ============================================================================
// Character Classes
// ============================================================================

const SYMBOL_RANGES: &[RangeInclusive<u32>] = &[33..=47, 58..=64];
const NUMBER_RANGES: &[RangeInclusive<u32>] = &[48..=57];
const LOWERCASE_RANGES: &[RangeInclusive<u32>] = &[97..=122];
const UPPERCASE_RANGES: &[RangeInclusive<u32>] = &[65..=90];

// Curated pictographs, ascending.
const EMOJI_RANGES: &[RangeInclusive<u32>] = &[
    0x231A..=0x231B,
    0x23E9..=0x23F3,
    0x23F8..=0x23FA,
    0x24C2..=0x24C2,
    0x2614..=0x2615,
    0x261D..=0x261D,
    0x2648..=0x2653,
    0x265F..=0x265F,
    0x267F..=0x267F,
    0x2693..=0x2693,
    0x26A1..=0x26A1,
    0x26AA..=0x26AB,
    0x26BD..=0x26BE,
    0x26C4..=0x26C5,
    0x26CE..=0x26CF,
    0x26D1..=0x26D1,
    0x26D3..=0x26D4,
    0x26E9..=0x26EA,
    0x26F0..=0x26F5,
    0x26F7..=0x26FA,
    0x26FD..=0x26FD,
    0x2702..=0x2702,
    0x2705..=0x2705,
    0x2708..=0x270D,
    0x270F..=0x270F,
    0x2712..=0x2712,
    0x2714..=0x2714,
    0x2716..=0x2716,
    0x271D..=0x271D,
    0x2721..=0x2721,
    0x2728..=0x2728,
    0x2733..=0x2734,
    0x2744..=0x2744,
    0x2747..=0x2747,
    0x274C..=0x274C,
    0x274E..=0x274E,
    0x2753..=0x2755,
    0x2757..=0x2757,
    0x2763..=0x2764,
    0x2795..=0x2797,
    0x27A1..=0x27A1,
    0x27B0..=0x27B0,
    0x27BF..=0x27BF,
    0x2934..=0x2935,
    0x2B05..=0x2B07,
    0x2B1B..=0x2B1C,
    0x2B50..=0x2B50,
    0x2B55..=0x2B55,
    0x3030..=0x3030,
    0x303D..=0x303D,
    0x3297..=0x3297,
    0x3299..=0x3299,
    0x1F004..=0x1F004,
    0x1F0CF..=0x1F0CF,
    0x1F170..=0x1F171,
    0x1F17E..=0x1F17F,
    0x1F18E..=0x1F18E,
    0x1F191..=0x1F19A,
    0x1F201..=0x1F202,
    0x1F21A..=0x1F21A,
    0x1F22F..=0x1F22F,
    0x1F232..=0x1F23A,
    0x1F250..=0x1F251,
    0x1F300..=0x1F321,
    0x1F324..=0x1F393,
    0x1F396..=0x1F397,
    0x1F399..=0x1F39B,
    0x1F39E..=0x1F3F0,
    0x1F3F3..=0x1F3F5,
    0x1F3F7..=0x1F3FA,
    0x1F400..=0x1F4FD,
    0x1F4FF..=0x1F53D,
    0x1F549..=0x1F54E,
    0x1F550..=0x1F567,
    0x1F56F..=0x1F570,
    0x1F573..=0x1F57A,
    0x1F587..=0x1F587,
    0x1F58A..=0x1F58D,
    0x1F590..=0x1F590,
    0x1F595..=0x1F596,
    0x1F5A4..=0x1F5A5,
    0x1F5A8..=0x1F5A8,
    0x1F5B1..=0x1F5B2,
    0x1F5BC..=0x1F5BC,
    0x1F5C2..=0x1F5C4,
    0x1F5D1..=0x1F5D3,
    0x1F5DC..=0x1F5DE,
    0x1F5E1..=0x1F5E1,
    0x1F5E3..=0x1F5E3,
    0x1F5E8..=0x1F5E8,
    0x1F5EF..=0x1F5EF,
    0x1F5F3..=0x1F5F3,
    0x1F5FA..=0x1F64F,
    0x1F680..=0x1F6C5,
    0x1F6CB..=0x1F6D2,
    0x1F6D5..=0x1F6D7,
    0x1F6E0..=0x1F6E5,
    0x1F6E9..=0x1F6E9,
    0x1F6EB..=0x1F6EC,
    0x1F6F0..=0x1F6F0,
    0x1F6F3..=0x1F6FC,
    0x1F7E0..=0x1F7EB,
    0x1F90C..=0x1F93A,
    0x1F93C..=0x1F945,
    0x1F947..=0x1F978,
    0x1F97A..=0x1F9CB,
    0x1F9CD..=0x1F9E6,
];

static SYMBOLS: LazyLock<Vec<u32>> = LazyLock::new(|| expand(SYMBOL_RANGES));
static NUMBERS: LazyLock<Vec<u32>> = LazyLock::new(|| expand(NUMBER_RANGES));
static LOWERCASE: LazyLock<Vec<u32>> = LazyLock::new(|| expand(LOWERCASE_RANGES));
static UPPERCASE: LazyLock<Vec<u32>> = LazyLock::new(|| expand(UPPERCASE_RANGES));
static EMOJI: LazyLock<Vec<u32>> = LazyLock::new(|| expand(EMOJI_RANGES));

/// Materialize inclusive ranges into an explicit list of code points.
fn expand(ranges: &[RangeInclusive<u32>]) -> Vec<u32> {
    ranges.iter().flat_map(|r| r.clone()).collect()
}

/// A toggleable category of characters. Declaration order is catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Symbols,
    Numbers,
    Lowercase,
    Uppercase,
    Emoji,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 5] = [
        CharacterClass::Symbols,
        CharacterClass::Numbers,
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Emoji,
    ];

    /// Code points this class contributes to the pool.
    pub fn code_points(self) -> &'static [u32] {
        match self {
            CharacterClass::Symbols => &SYMBOLS,
            CharacterClass::Numbers => &NUMBERS,
            CharacterClass::Lowercase => &LOWERCASE,
            CharacterClass::Uppercase => &UPPERCASE,
            CharacterClass::Emoji => &EMOJI,
        }
    }

    /// Stable form key.
    pub fn key(self) -> &'static str {
        match self {
            CharacterClass::Symbols => "includeSymbols",
            CharacterClass::Numbers => "includeNumbers",
            CharacterClass::Lowercase => "includeLowercaseCharacters",
            CharacterClass::Uppercase => "includeUppercaseCharacters",
            CharacterClass::Emoji => "includeEmoji",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Symbols => "Symbols",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Lowercase => "Lowercase Characters",
            CharacterClass::Uppercase => "Uppercase Characters",
            CharacterClass::Emoji => "Emoji \u{1F603}",
        }
    }

    /// Whether the class starts out selected.
    pub fn enabled_by_default(self) -> bool {
        !matches!(self, CharacterClass::Emoji)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

// ============================================================================
// Length Tiers
// ============================================================================

pub const LENGTH_KEY: &str = "passwordLength";
pub const DEFAULT_LENGTH: usize = 16;
/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 1 << 20;

const WEAK_LENGTHS: RangeInclusive<usize> = 6..=15;
const STRONG_LENGTHS: RangeInclusive<usize> = 16..=128;
const UNBELIEVABLE_LENGTHS: &[usize] = &[256, 512, 1024, 2048];

/// Named group of selectable lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthTier {
    Weak,
    Strong,
    Unbelievable,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [
        LengthTier::Weak,
        LengthTier::Strong,
        LengthTier::Unbelievable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LengthTier::Weak => "Weak",
            LengthTier::Strong => "Strong",
            LengthTier::Unbelievable => "Unbelievable",
        }
    }

    /// Lengths offered in this tier, ascending.
    pub fn lengths(self) -> Vec<usize> {
        match self {
            LengthTier::Weak => WEAK_LENGTHS.collect(),
            LengthTier::Strong => STRONG_LENGTHS.collect(),
            LengthTier::Unbelievable => UNBELIEVABLE_LENGTHS.to_vec(),
        }
    }
}

/// Every catalog length in display order.
pub fn length_options() -> Vec<usize> {
    LengthTier::ALL.into_iter().flat_map(LengthTier::lengths).collect()
}

/// Tier a length would be listed under, if it appears in the catalog.
pub fn tier_of(length: usize) -> Option<LengthTier> {
    LengthTier::ALL
        .into_iter()
        .find(|tier| tier.lengths().contains(&length))
}

// ============================================================================
// Controls
// ============================================================================

/// How a form control is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Select {
        tiers: &'static [LengthTier],
        default: usize,
    },
    Checkbox {
        class: CharacterClass,
        default: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
}

/// Ordered controls the form renders: the length select followed by one
/// checkbox per character class.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub controls: Vec<Control>,
}

impl Catalog {
    pub fn standard() -> Self {
        let mut controls = vec![Control {
            key: LENGTH_KEY,
            label: "Length",
            kind: ControlKind::Select {
                tiers: &LengthTier::ALL,
                default: DEFAULT_LENGTH,
            },
        }];
        controls.extend(CharacterClass::ALL.into_iter().map(|class| Control {
            key: class.key(),
            label: class.label(),
            kind: ControlKind::Checkbox {
                class,
                default: class.enabled_by_default(),
            },
        }));
        Self { controls }
    }

    pub fn get(&self, key: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.key == key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
