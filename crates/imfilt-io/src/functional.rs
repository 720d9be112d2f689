use std::path::Path;

use imfilt_image::{Image, ImageSize, RasterImage};

use crate::error::IoError;

/// Reads an image from the given file path as RGBA8.
///
/// The method tries to read from any image format supported by the image crate
/// and converts the decoded pixels to 8-bit RGBA.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGBA image containing the image data.
pub fn read_image_rgba8(file_path: impl AsRef<Path>) -> Result<RasterImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let bytes = std::fs::read(&file_path)?;
    let image = decode_image_rgba8(&bytes)?;

    log::debug!("read {} from {}", image.size(), file_path.display());

    Ok(image)
}

/// Decodes an encoded image held in memory as RGBA8.
///
/// The format is guessed from the content.
///
/// # Arguments
///
/// * `bytes` - The encoded image, e.g. the content of an uploaded file.
pub fn decode_image_rgba8(bytes: &[u8]) -> Result<RasterImage, IoError> {
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgba8().into_raw())?)
}

/// Writes an RGBA8 image to the given file path.
///
/// The encoding is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to encode.
pub fn write_image_rgba8(file_path: impl AsRef<Path>, image: &RasterImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let size = image.size();
    let (Ok(width), Ok(height)) = (u32::try_from(size.width), u32::try_from(size.height)) else {
        return Err(IoError::ImageTooLarge(size));
    };

    image::save_buffer(
        file_path,
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )?;

    log::debug!("wrote {} to {}", size, file_path.display());

    Ok(())
}
