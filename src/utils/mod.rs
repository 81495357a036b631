//! Utility modules for common functionality.
//!
//! This module provides utility functions and types used across the library.
//! Currently includes:
//!
//! - logging: Logging setup and structured error context

pub mod logging;
