//! Password generator with guaranteed character-type coverage.
//!
//! [`pass`] holds the generator and strength rating, [`session`] the live
//! state the front-ends drive, and [`cli`]/[`tui`] the two front-ends.

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod error;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod session;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
