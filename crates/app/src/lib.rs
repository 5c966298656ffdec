//! Relay command line front end.
//!
//! Drives the workbench without a GUI: commands go in, the update stream is
//! rendered as plain text lines.

pub mod cli;
pub mod error;
pub mod headless;

pub use cli::{Cli, Command};
pub use error::CliError;
pub use headless::{Headless, RunReport, render};
