/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the number of elements of the image overflows.
    #[error("Image size ({0}, {1}) with {2} channels is too large")]
    ImageSizeOverflow(usize, usize, usize),

    /// Error when the source and destination sizes differ.
    #[error("Image size mismatch: ({0}, {1}) != ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),
}
