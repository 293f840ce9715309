//! Common utilities for the Bevel border resolver.
//!
//! This crate provides shared infrastructure used by every Bevel component:
//! - **Warning System** - deduplicated, colored terminal output for unsupported input

pub mod warning;
