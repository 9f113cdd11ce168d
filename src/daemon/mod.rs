// file: src/daemon/mod.rs
// version: 1.0.0
// guid: 7d1e9f4b-6a2c-4d8e-b5f0-3c9a7e2d6b14

//! Client for the davit configuration daemon

pub mod client;

pub use client::DaemonClient;
