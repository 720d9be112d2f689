#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image composition module.
pub mod compose;

/// filter selection and dispatch.
pub mod engine;

/// Error types for the filter engine.
pub mod error;

/// image filtering module.
pub mod filter;

pub use crate::engine::{apply_filter, apply_filter_raw, FilterKind};
pub use crate::error::FilterError;
