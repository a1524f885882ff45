//! Strength rating for generated passwords.
//!
//! The score reads the enabled categories from the options instead of
//! scanning the password. That is only sound because the generator puts
//! at least one character of every enabled category into its output, so
//! [`assess`] must not be used on passwords that came from elsewhere.

use std::fmt;

use super::options::GenerationOptions;
use crate::pass::charset::Category;

pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Weak,
    Medium,
    Strong,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Weak => "Weak",
            Level::Medium => "Medium",
            Level::Strong => "Strong",
        }
    }

    pub fn width_percent(self) -> u8 {
        match self {
            Level::Weak => 33,
            Level::Medium => 66,
            Level::Strong => 100,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Level::Weak => (0xef, 0x44, 0x44),
            Level::Medium => (0xf5, 0x9e, 0x0b),
            Level::Strong => (0x22, 0xc5, 0x5e),
        }
    }

    fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Level::Weak,
            3..=4 => Level::Medium,
            _ => Level::Strong,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of [`assess`]. `level` is `None` when there is no password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Assessment {
    pub level: Option<Level>,
    pub score: u8,
    pub width_percent: u8,
}

impl Assessment {
    pub const NONE: Assessment = Assessment {
        level: None,
        score: 0,
        width_percent: 0,
    };

    /// Empty string when unrated.
    pub fn label(&self) -> &'static str {
        self.level.map_or("", Level::label)
    }
}

pub fn assess(password: &str, options: &GenerationOptions) -> Assessment {
    if password.is_empty() {
        return Assessment::NONE;
    }

    let length = password.chars().count();
    let mut score = 0;
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }
    if options.is_enabled(Category::Uppercase) && options.is_enabled(Category::Lowercase) {
        score += 1;
    }
    if options.is_enabled(Category::Digit) {
        score += 1;
    }
    if options.is_enabled(Category::Symbol) {
        score += 1;
    }

    let level = Level::from_score(score);
    Assessment {
        level: Some(level),
        score,
        width_percent: level.width_percent(),
    }
}

/// Password entropy in bits for a uniform draw from `alphabet_size` symbols.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}
