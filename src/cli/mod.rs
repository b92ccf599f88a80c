//! CLI module
//!
//! Command-line interface for reading headlines.
//!
//! # Commands
//!
//! - `show` - Print the first page
//! - `browse` - Page interactively from stdin
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{browse_session, emit, BrowseCommand, Runner};
