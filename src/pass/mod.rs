//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod options;
pub mod strength;

pub use charset::{Category, CategorySet};
pub use generate::Generator;
pub use options::GenerationOptions;
pub use strength::{Assessment, Level, assess};
