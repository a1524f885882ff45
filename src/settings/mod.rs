//! Saved generator preferences.
//!
//! Only the options are stored, never a generated password.

mod file;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::pass::options::DEFAULT_LENGTH;
use crate::pass::{Category, CategorySet, GenerationOptions};

pub use file::{CONFIG_DIR_ENV, config_dir};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub categories: Vec<Category>,
    pub clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        file::load(&config_dir()?)
    }

    /// Returns the path written to.
    pub fn save_to_file(&self) -> Result<PathBuf> {
        file::save(self, &config_dir()?)
    }

    pub fn capture(options: &GenerationOptions, clipboard: bool) -> Self {
        Self {
            length: options.length(),
            categories: options.categories().iter().collect(),
            clipboard,
        }
    }

    /// Options described by these settings. Values the validated setters
    /// refuse fall back to the defaults.
    pub fn options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::default();
        if !options.set_length(self.length) {
            warn!(length = self.length, "ignoring saved length outside 4..=64");
        }
        match CategorySet::new(self.categories.iter().copied()) {
            Some(categories) => {
                if let Some(restored) = GenerationOptions::new(options.length(), categories) {
                    options = restored;
                }
            }
            None => warn!("ignoring saved empty category list"),
        }
        options
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            categories: Category::ALL.to_vec(),
            clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_default_options() {
        assert_eq!(Settings::default().options(), GenerationOptions::default());
    }

    #[test]
    fn capture_then_restore() {
        let mut options = GenerationOptions::default();
        options.set_length(32);
        options.toggle(Category::Symbol);
        let settings = Settings::capture(&options, true);
        assert_eq!(settings.categories.len(), 3);
        assert!(settings.clipboard);
        assert_eq!(settings.options(), options);
    }

    #[test]
    fn invalid_values_are_sanitized() {
        let settings = Settings {
            length: 500,
            categories: vec![],
            clipboard: false,
        };
        assert_eq!(settings.options(), GenerationOptions::default());

        let settings = Settings {
            length: 10,
            categories: vec![Category::Digit],
            clipboard: false,
        };
        let options = settings.options();
        assert_eq!(options.length(), 10);
        assert_eq!(options.categories().count(), 1);
    }
}
