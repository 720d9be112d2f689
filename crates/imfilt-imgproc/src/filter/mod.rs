//! Filter operations
//!
//! This module provides the 3x3 filter operations for RGBA images.

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;
