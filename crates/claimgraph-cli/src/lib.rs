//! Claimgraph CLI library
//!
//! Each subcommand loads the case document, applies one operation, and saves
//! the document back. The document on disk is the only state; commands never
//! hold anything between invocations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command, ExtractArgs, NetworkAction, NetworkArgs, ShowArgs, ShowSection};
pub use error::{CliError, Result};
