//! kick-throttle library
//!
//! Command definitions and dispatch for the `kick-throttle` binary, exported
//! so the binary stays a thin shell over [`run`].

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod group_commands;
pub mod logger;
pub mod outcome;
pub mod user_commands;

#[cfg(test)]
mod tests;

pub use app::{execute, run};
pub use cli::Cli;
pub use error::{CliError, Result};
pub use outcome::Outcome;

pub const EXIT_PERMITTED: u8 = 0;
pub const EXIT_DENIED: u8 = 1;
pub const EXIT_ERROR: u8 = 2;
