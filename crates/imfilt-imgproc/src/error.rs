use imfilt_image::ImageError;

/// An error type for the filter engine.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// The raster is malformed or does not fit the destination.
    #[error("Invalid image. {0}")]
    InvalidImage(#[from] ImageError),

    /// The filter name does not match any known filter.
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),
}
