use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use imfilt_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major and interleaved, `CHANNELS` values per pixel,
/// so the buffer always holds `width * height * CHANNELS` elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGBA raster, channels stored in R, G, B, A order.
pub type RasterImage = Image<u8, 4>;

/// Number of elements needed to hold an image of `size` with `channels` values per pixel.
fn num_elements(size: ImageSize, channels: usize) -> Result<usize, ImageError> {
    size.width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(ImageError::ImageSizeOverflow(size.width, size.height, channels))
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, or the size
    /// cannot be represented in memory, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use imfilt_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///    ImageSize {
    ///       width: 10,
    ///      height: 20,
    ///  },
    /// vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        let expected = num_elements(size, CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use imfilt_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///    height: 20,
    /// }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 4);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; num_elements(size, CHANNELS)?];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the channels of the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = (y * self.width() + x) * CHANNELS;
        self.data.get(offset..offset + CHANNELS)
    }

    /// Get the value at the given pixel and channel.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index of the pixel.
    ///
    /// # Errors
    ///
    /// If the coordinates or the channel are out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<&T, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }

        Ok(&self.data[(y * self.width() + x) * CHANNELS + ch])
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(ImageSize::from([10, 20]), image_size);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 4);

        Ok(())
    }

    #[test]
    fn image_invalid_length() {
        let res = Image::<u8, 4>::new([2, 2].into(), vec![0u8; 15]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(15, 16)));
    }

    #[test]
    fn image_size_overflow() {
        let width = usize::MAX / 4 + 1;

        let res = Image::<u8, 4>::new([width, 1].into(), vec![]);
        assert_eq!(res, Err(ImageError::ImageSizeOverflow(width, 1, 4)));

        let res = Image::<u8, 4>::from_size_val([width, 1].into(), 0);
        assert_eq!(res, Err(ImageError::ImageSizeOverflow(width, 1, 4)));

        let res = Image::<u8, 1>::new([usize::MAX, 2].into(), vec![]);
        assert_eq!(res, Err(ImageError::ImageSizeOverflow(usize::MAX, 2, 1)));
    }

    #[test]
    fn image_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new([0, 5].into(), vec![])?;
        assert!(image.as_slice().is_empty());
        assert_eq!(image.pixel(0, 0), None);
        Ok(())
    }

    #[test]
    fn image_get_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1, 2, 3, 4, 5, 6, 7, 8],
        )?;

        assert_eq!(image.get_pixel(1, 0, 2)?, &7);
        assert_eq!(image.pixel(1, 0), Some(&[5u8, 6, 7, 8][..]));
        assert_eq!(
            image.get_pixel(2, 0, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 1))
        );
        assert_eq!(
            image.get_pixel(0, 0, 4),
            Err(ImageError::ChannelIndexOutOfBounds(4, 4))
        );

        Ok(())
    }
}
