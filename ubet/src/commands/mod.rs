//! Command implementations for the ubet CLI.
//!
//! Each submodule implements one subcommand; `common` holds the shared
//! presentation types and helpers.

pub mod common;
pub mod dialect;
pub mod export;
pub mod scan;
