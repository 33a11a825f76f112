//! Request layer of the `dailies` command.
//!
//! Parses the command line, derives the seed (today's UTC date, an explicit
//! date, an explicit seed, or the wall clock), runs the matching generator,
//! and shapes the result into the JSON payload printed on stdout.

pub use self::error::AppError;

pub mod cli;
mod error;
pub mod payload;
pub mod request;
pub mod version;
