// file: src/cli/mod.rs
// version: 1.0.0
// guid: 2c8f5a1d-9b3e-4d7c-8a0f-6e1b4d9c2f85

//! Command line interface for davit

pub mod args;
pub mod commands;
