//! Triads for a chord progression in every major key.
//!
//! A progression is written as Roman numerals (`I V vi IV`) or digits
//! (`1-5-6-4`); [theory::resolve] returns its chords in all twelve keys. The
//! `server` module puts a form and a JSON API in front of it, `cli` a command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod server;
pub mod theory;

pub use error::{Error, Result};
pub use theory::{resolve, InvalidInputError, Progression};
