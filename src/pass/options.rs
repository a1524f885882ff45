//! Generation options and their validated setters.

use super::charset::{Category, CategorySet};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Length and enabled categories for one generation.
///
/// Both fields are private so every change goes through a setter that
/// keeps `length` in `[MIN_LENGTH, MAX_LENGTH]` and the category set
/// non-empty. Setters report a rejected change by returning `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    length: usize,
    categories: CategorySet,
}

impl GenerationOptions {
    pub fn new(length: usize, categories: CategorySet) -> Option<Self> {
        let mut options = Self::default();
        if !options.set_length(length) {
            return None;
        }
        options.categories = categories;
        Some(options)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.categories.contains(category)
    }

    pub fn set_length(&mut self, length: usize) -> bool {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return false;
        }
        self.length = length;
        true
    }

    pub fn toggle(&mut self, category: Category) -> bool {
        self.categories.toggle(category)
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            categories: CategorySet::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_generator_page() {
        let options = GenerationOptions::default();
        assert_eq!(options.length(), 16);
        assert_eq!(options.categories().count(), 4);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let mut options = GenerationOptions::default();
        assert!(options.set_length(MIN_LENGTH));
        assert!(options.set_length(MAX_LENGTH));
        assert!(!options.set_length(MIN_LENGTH - 1));
        assert!(!options.set_length(MAX_LENGTH + 1));
        assert_eq!(options.length(), MAX_LENGTH);
    }

    #[test]
    fn new_rejects_out_of_range_length() {
        assert!(GenerationOptions::new(3, CategorySet::all()).is_none());
        let options = GenerationOptions::new(30, CategorySet::only(Category::Digit)).unwrap();
        assert_eq!(options.length(), 30);
        assert!(options.is_enabled(Category::Digit));
        assert!(!options.is_enabled(Category::Symbol));
    }

    #[test]
    fn disabling_down_to_one_category() {
        let mut options = GenerationOptions::default();
        assert!(options.toggle(Category::Uppercase));
        assert!(options.toggle(Category::Lowercase));
        assert!(options.toggle(Category::Digit));
        assert!(!options.toggle(Category::Symbol));
        assert_eq!(options.categories().count(), 1);
        assert!(options.is_enabled(Category::Symbol));
    }
}
