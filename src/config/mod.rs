// file: src/config/mod.rs
// version: 1.0.0
// guid: b7d2f8e4-1c6a-4b9d-8e3f-5a0c7d4b2e91

//! Configuration record models for davit
//!
//! These mirror the daemon's wire representation of the configuration tree.
//! The CLI never owns these records; it borrows transient copies from the
//! daemon, edits them in memory, and submits them back.

pub mod account;

pub use account::GoogleCloudBuildAccount;
