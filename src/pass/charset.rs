//! Character categories and the alphabets built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Category {
    /// Canonical order: alphabet union and guaranteed characters follow it.
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digit,
        Category::Symbol,
    ];

    /// Member characters. All ASCII.
    pub fn members(self) -> &'static [u8] {
        match self {
            Category::Uppercase => UPPERCASE.as_bytes(),
            Category::Lowercase => LOWERCASE.as_bytes(),
            Category::Digit => DIGITS.as_bytes(),
            Category::Symbol => SYMBOLS.as_bytes(),
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.members().contains(&(c as u8))
    }

    /// Checkbox label shown in the TUI.
    pub fn label(self) -> &'static str {
        match self {
            Category::Uppercase => "Uppercase (A-Z)",
            Category::Lowercase => "Lowercase (a-z)",
            Category::Digit => "Numbers (0-9)",
            Category::Symbol => "Symbols (!@#$%^&*...)",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Category::Uppercase => 0b0001,
            Category::Lowercase => 0b0010,
            Category::Digit => 0b0100,
            Category::Symbol => 0b1000,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
            Category::Digit => "digit",
            Category::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Non-empty set of enabled categories.
///
/// Emptiness is unrepresentable: [`CategorySet::new`] refuses an empty input
/// and [`CategorySet::toggle`] refuses to remove the last member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub fn all() -> Self {
        CategorySet(0b1111)
    }

    pub fn only(category: Category) -> Self {
        CategorySet(category.bit())
    }

    /// Returns `None` if `categories` yields nothing.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Option<Self> {
        let bits = categories.into_iter().fold(0, |acc, c| acc | c.bit());
        (bits != 0).then_some(CategorySet(bits))
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Flip `category`. Returns `false`, leaving the set untouched, if that
    /// would disable the last enabled category.
    pub fn toggle(&mut self, category: Category) -> bool {
        let next = self.0 ^ category.bit();
        if next == 0 {
            return false;
        }
        self.0 = next;
        true
    }

    /// Enabled categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        CategorySet::all()
    }
}

/// Ordered union of the member strings. Duplicates are kept.
pub fn build(categories: impl IntoIterator<Item = Category>) -> Vec<u8> {
    let mut chars = Vec::new();
    for category in categories {
        chars.extend_from_slice(category.members());
    }
    chars
}

/// Alphabet size for entropy display.
pub fn size(set: &CategorySet) -> usize {
    set.iter().map(|c| c.members().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_sets_are_fixed() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 26);
    }

    #[test]
    fn categories_are_disjoint() {
        for a in Category::ALL {
            for b in Category::ALL {
                if a == b {
                    continue;
                }
                assert!(a.members().iter().all(|ch| !b.members().contains(ch)));
            }
        }
    }

    #[test]
    fn empty_set_is_refused() {
        assert!(CategorySet::new(Vec::<Category>::new()).is_none());
        let set = CategorySet::new([Category::Digit, Category::Digit]).unwrap();
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn toggle_keeps_last_member() {
        let mut set = CategorySet::only(Category::Symbol);
        assert!(!set.toggle(Category::Symbol));
        assert_eq!(set, CategorySet::only(Category::Symbol));
        assert!(set.toggle(Category::Digit));
        assert!(set.toggle(Category::Symbol));
        assert_eq!(set, CategorySet::only(Category::Digit));
    }

    #[test]
    fn iterates_in_canonical_order() {
        let set = CategorySet::new([Category::Symbol, Category::Uppercase]).unwrap();
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Category::Uppercase, Category::Symbol]);
    }

    #[test]
    fn build_concatenates_in_order() {
        let chars = build([Category::Digit, Category::Uppercase]);
        assert_eq!(chars, format!("{DIGITS}{UPPERCASE}").into_bytes());
        assert_eq!(size(&CategorySet::all()), 88);
    }

    #[test]
    fn contains_checks_membership() {
        assert!(Category::Symbol.contains('?'));
        assert!(!Category::Symbol.contains('~'));
        assert!(!Category::Lowercase.contains('é'));
    }
}
