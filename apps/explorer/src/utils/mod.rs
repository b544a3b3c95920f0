//! Shared utilities for Explorer

pub mod paths;
