// file: src/lib.rs
// version: 1.1.0
// guid: 9a4e7c21-5b3d-4e8f-a1c6-7d2b9f0e4a58

//! # Davit
//!
//! Command-line client for the davit configuration daemon. Edits named records
//! inside a persisted deployment configuration tree; all validation and
//! persistence happens daemon-side, the CLI only fetches, merges, and submits.

pub mod cli;
pub mod config;
pub mod daemon;
pub mod edit;
pub mod error;
pub mod logging;
pub mod ui;

pub use error::{DavitError, Result};

/// Version information for the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
