//! JSON-backed configuration for the demo binaries.

pub mod vignette_demo;
