//! # fizzbuzz Library
//!
//! This library exposes the command-line modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export fizzbuzz_core for convenience
pub use fizzbuzz_core;
