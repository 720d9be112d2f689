/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode or encode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] imfilt_image::ImageError),

    /// The image dimensions do not fit the encoder.
    #[error("Image size {0} is too large to encode")]
    ImageTooLarge(imfilt_image::ImageSize),
}
