//! Test support for the rules engine workspace
//!
//! Provides the unified logging initialization shared by the engine's unit
//! tests and integration test binaries.

pub mod logging;
