//! Common utilities for brick.
//!
//! This crate provides shared infrastructure used by the builder crates:
//! - **Warning System** - colored terminal output for ignored or unusual input

pub mod warning;
