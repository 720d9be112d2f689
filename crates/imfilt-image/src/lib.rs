#![deny(missing_docs)]
//! Image types and traits for generating and manipulating images

/// image representation for filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// bounds-checked pixel access and 3x3 neighborhoods.
pub mod sampler;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, RasterImage};
pub use crate::sampler::{neighborhood_3x3, sample, Neighborhood3x3};
