//! Common utilities for the Willow fragment toolkit.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - colored terminal output for recoverable parse anomalies

pub mod warning;
