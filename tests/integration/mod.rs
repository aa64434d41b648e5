//! Integration Tests Module
//!
//! End-to-end tests that drive the CSV scan pipeline and report export the
//! way the CLI does.

pub mod scan_pipeline;
