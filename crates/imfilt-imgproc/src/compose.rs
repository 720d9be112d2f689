use imfilt_image::{Image, ImageError, ImageSize};

/// Place two images of the same height next to each other.
///
/// # Arguments
///
/// * `left` - The image placed on the left with shape (H, W1, C).
/// * `right` - The image placed on the right with shape (H, W2, C).
///
/// # Returns
///
/// A new image with shape (H, W1 + W2, C).
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the heights differ.
///
/// # Example
///
/// ```
/// use imfilt_image::{Image, ImageSize};
/// use imfilt_imgproc::compose::hconcat;
///
/// let a = Image::<u8, 4>::from_size_val([2, 3].into(), 0).unwrap();
/// let b = Image::<u8, 4>::from_size_val([1, 3].into(), 255).unwrap();
///
/// let side_by_side = hconcat(&a, &b).unwrap();
///
/// assert_eq!(side_by_side.size(), ImageSize { width: 3, height: 3 });
/// assert_eq!(side_by_side.get_pixel(2, 0, 0).unwrap(), &255);
/// ```
pub fn hconcat<T, const C: usize>(
    left: &Image<T, C>,
    right: &Image<T, C>,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    if left.height() != right.height() {
        return Err(ImageError::InvalidImageSize(
            left.width(),
            left.height(),
            right.width(),
            right.height(),
        ));
    }

    let width = left
        .width()
        .checked_add(right.width())
        .ok_or(ImageError::ImageSizeOverflow(usize::MAX, left.height(), C))?;
    let size = ImageSize {
        width,
        height: left.height(),
    };

    let mut data = Vec::with_capacity(left.as_slice().len() + right.as_slice().len());
    for y in 0..size.height {
        data.extend_from_slice(row(left, y));
        data.extend_from_slice(row(right, y));
    }

    Image::new(size, data)
}

fn row<T, const C: usize>(img: &Image<T, C>, y: usize) -> &[T] {
    let stride = img.width() * C;
    &img.as_slice()[y * stride..(y + 1) * stride]
}
