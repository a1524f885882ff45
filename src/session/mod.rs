//! Live generator state behind the CLI and TUI.
//!
//! A [`Session`] owns the current options, the last password and its
//! assessment. Every accepted change regenerates immediately; rejected
//! changes leave everything, including the password, untouched.

use rand::rngs::StdRng;
use tracing::debug;
use zeroize::Zeroizing;

use crate::entropy::RandomSource;
use crate::pass::{Assessment, Category, GenerationOptions, Generator, assess};

pub struct Session<R = StdRng> {
    generator: Generator<R>,
    options: GenerationOptions,
    password: Zeroizing<String>,
    assessment: Assessment,
    copied: bool,
}

impl Session<StdRng> {
    pub fn new() -> Self {
        Self::with_options(GenerationOptions::default())
    }

    pub fn with_options(options: GenerationOptions) -> Self {
        Self::with_generator(Generator::new(), options)
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_generator(generator: Generator<R>, options: GenerationOptions) -> Self {
        let mut session = Self {
            generator,
            options,
            password: Zeroizing::new(String::new()),
            assessment: Assessment::NONE,
            copied: false,
        };
        session.regenerate();
        session
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Current password. Empty means no password is available.
    ///
    /// The value only changes on an accepted option change or
    /// [`Session::regenerate`].
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn assessment(&self) -> Assessment {
        self.assessment
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Record that the current password was copied. Refused when there is
    /// nothing to copy.
    pub fn mark_copied(&mut self) -> bool {
        if self.password.is_empty() {
            return false;
        }
        self.copied = true;
        true
    }

    pub fn regenerate(&mut self) {
        self.password = Zeroizing::new(self.generator.generate(&self.options));
        self.assessment = assess(&self.password, &self.options);
        self.copied = false;
        debug!(
            length = self.options.length(),
            score = self.assessment.score,
            "session regenerated"
        );
    }

    pub fn set_length(&mut self, length: usize) -> bool {
        if !self.options.set_length(length) {
            debug!(length, "rejected length change");
            return false;
        }
        self.regenerate();
        true
    }

    pub fn toggle_category(&mut self, category: Category) -> bool {
        if !self.options.toggle(category) {
            debug!(%category, "rejected disabling the last category");
            return false;
        }
        self.regenerate();
        true
    }

    /// Back to default options, with a fresh password.
    pub fn reset(&mut self) {
        self.options = GenerationOptions::default();
        self.regenerate();
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::pass::Level;

    fn seeded() -> Session {
        Session::with_generator(
            Generator::with_source(StdRng::seed_from_u64(3)),
            GenerationOptions::default(),
        )
    }

    #[test]
    fn starts_with_a_rated_password() {
        let session = Session::new();
        assert_eq!(session.password().len(), 16);
        assert_eq!(session.assessment().level, Some(Level::Strong));
        assert!(!session.is_copied());
    }

    #[test]
    fn accepted_length_change_regenerates() {
        let mut session = seeded();
        assert!(session.set_length(8));
        assert_eq!(session.password().len(), 8);
        assert_eq!(session.assessment().score, 3);
    }

    #[test]
    fn rejected_length_keeps_password() {
        let mut session = seeded();
        let before = session.password().to_string();
        assert!(!session.set_length(3));
        assert!(!session.set_length(65));
        assert_eq!(session.password(), before);
        assert_eq!(session.options().length(), 16);
    }

    #[test]
    fn last_category_cannot_be_disabled() {
        let mut session = seeded();
        assert!(session.toggle_category(Category::Uppercase));
        assert!(session.toggle_category(Category::Lowercase));
        assert!(session.toggle_category(Category::Digit));

        let before = session.password().to_string();
        assert!(!session.toggle_category(Category::Symbol));
        assert_eq!(session.password(), before);
        assert_eq!(session.options().categories().count(), 1);
        assert!(session.password().chars().all(|c| Category::Symbol.contains(c)));
    }

    #[test]
    fn regenerate_keeps_options() {
        let mut session = seeded();
        session.toggle_category(Category::Symbol);
        let options = *session.options();
        let before = session.password().to_string();
        session.regenerate();
        assert_eq!(*session.options(), options);
        assert_ne!(session.password(), before);
    }

    #[test]
    fn copied_flag_clears_on_regenerate() {
        let mut session = seeded();
        assert!(session.mark_copied());
        assert!(session.is_copied());
        session.regenerate();
        assert!(!session.is_copied());

        session.mark_copied();
        session.set_length(40);
        assert!(!session.is_copied());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = seeded();
        session.set_length(5);
        session.toggle_category(Category::Digit);
        session.reset();
        assert_eq!(*session.options(), GenerationOptions::default());
        assert_eq!(session.password().len(), 16);
    }

    #[test]
    fn password_is_stable_between_reads() {
        let session = seeded();
        assert_eq!(session.password(), session.password());
        assert_eq!(session.assessment(), session.assessment());
    }
}
