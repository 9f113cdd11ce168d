// file: src/logging/mod.rs
// version: 1.0.0
// guid: 8e2b5d1f-7c4a-4e9b-a3d6-0f8c2e5a9b31

//! Logging setup for davit

pub mod logger;
