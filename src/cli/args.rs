use clap::Parser;

use crate::logging::DEFAULT_FILTER;
use crate::pass::Category;
use crate::pass::options::{MAX_LENGTH, MIN_LENGTH};

#[derive(Parser, Debug)]
#[command(name = "vaultpass", version)]
#[command(about = "Password generator that always covers every enabled character type")]
pub struct Args {
    /// Characters per password (4-64, default 16)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    pub length: Option<u16>,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: u32,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_special: bool,

    /// Print strength and entropy after each password
    #[arg(long)]
    pub strength: bool,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Start from saved preferences instead of defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting options as preferences
    #[arg(long)]
    pub save: bool,

    /// Open the interactive generator
    #[arg(short, long)]
    pub interactive: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Diagnostic log filter, e.g. `debug`
    #[arg(long, env = "VAULTPASS_LOG", default_value = DEFAULT_FILTER)]
    pub log_level: String,
}

impl Args {
    /// Categories the user asked to leave out, in canonical order.
    pub fn excluded(&self) -> Vec<Category> {
        let flags = [
            (Category::Uppercase, self.no_upper),
            (Category::Lowercase, self.no_lower),
            (Category::Digit, self.no_digits),
            (Category::Symbol, self.no_special),
        ];
        flags
            .into_iter()
            .filter_map(|(category, off)| off.then_some(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("vaultpass").chain(args.iter().copied()))
    }

    #[test]
    fn definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.length, None);
        assert_eq!(args.number, 1);
        assert!(args.excluded().is_empty());
    }

    #[test]
    fn length_is_range_checked() {
        assert_eq!(parse(&["-l", "4"]).unwrap().length, Some(4));
        assert_eq!(parse(&["--length", "64"]).unwrap().length, Some(64));
        assert!(parse(&["-l", "3"]).is_err());
        assert!(parse(&["-l", "65"]).is_err());
    }

    #[test]
    fn zero_count_is_rejected() {
        assert!(parse(&["-n", "0"]).is_err());
    }

    #[test]
    fn exclusions_follow_canonical_order() {
        let args = parse(&["--no-special", "--no-upper"]).unwrap();
        assert_eq!(args.excluded(), vec![Category::Uppercase, Category::Symbol]);
    }
}
