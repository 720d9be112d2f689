use crate::image::Image;

/// Number of interleaved values per pixel in a raw RGBA buffer.
const RGBA_CHANNELS: usize = 4;

/// Read one channel of a pixel from a raw interleaved RGBA buffer.
///
/// Coordinates are signed so that callers can probe the taps around a pixel
/// without checking for underflow first.
///
/// # Arguments
///
/// * `buffer` - Row-major RGBA data, 4 values per pixel.
/// * `width` - Width of the raster in pixels.
/// * `height` - Height of the raster in pixels.
/// * `x` - Column of the pixel.
/// * `y` - Row of the pixel.
/// * `channel` - Channel index, 0 to 3.
///
/// # Returns
///
/// The stored value, or `None` when `(x, y)` lies outside the raster (no clamping
/// or wrap-around is performed) or the channel does not exist.
///
/// # Example
///
/// ```
/// use imfilt_image::sample;
///
/// let rgba = [10u8, 20, 30, 255, 40, 50, 60, 128];
///
/// assert_eq!(sample(&rgba, 2, 1, 1, 0, 3), Some(128));
/// assert_eq!(sample(&rgba, 2, 1, -1, 0, 0), None);
/// assert_eq!(sample(&rgba, 2, 1, 0, 1, 0), None);
/// ```
pub fn sample<T: Copy>(
    buffer: &[T],
    width: usize,
    height: usize,
    x: isize,
    y: isize,
    channel: usize,
) -> Option<T> {
    let offset = pixel_offset(width, height, x, y)? * RGBA_CHANNELS;
    if channel >= RGBA_CHANNELS {
        return None;
    }
    buffer.get(offset + channel).copied()
}

/// Linear pixel index of `(x, y)` when it lies inside a `width x height` grid.
fn pixel_offset(width: usize, height: usize, x: isize, y: isize) -> Option<usize> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    if x >= width || y >= height {
        return None;
    }
    Some(y * width + x)
}

impl<T: Copy, const C: usize> Image<T, C> {
    /// Read one channel of the pixel at `(x, y)`.
    ///
    /// Same contract as [`sample`]: `None` for out-of-bounds coordinates or channels.
    pub fn sample(&self, x: isize, y: isize, channel: usize) -> Option<T> {
        if channel >= C {
            return None;
        }
        let offset = pixel_offset(self.width(), self.height(), x, y)? * C;
        self.as_slice().get(offset + channel).copied()
    }
}

/// Iterator over the in-bounds taps of a 3x3 window.
///
/// Yields `(ky, kx, pixel)` in row-major order, where `ky` and `kx` index the
/// kernel (0 to 2, centre at 1) and `pixel` holds the channels of the tap.
/// Taps falling outside the image are skipped.
pub struct Neighborhood3x3<'a, T, const C: usize> {
    src: &'a Image<T, C>,
    x: usize,
    y: usize,
    tap: usize,
}

impl<'a, T, const C: usize> Iterator for Neighborhood3x3<'a, T, C> {
    type Item = (usize, usize, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.tap < 9 {
            let (ky, kx) = (self.tap / 3, self.tap % 3);
            self.tap += 1;

            // x + kx - 1 without going below zero
            let (Some(col), Some(row)) = (
                (self.x + kx).checked_sub(1),
                (self.y + ky).checked_sub(1),
            ) else {
                continue;
            };

            if let Some(pixel) = self.src.pixel(col, row) {
                return Some((ky, kx, pixel));
            }
        }
        None
    }
}

/// Iterate over the in-bounds 3x3 neighborhood centred at `(x, y)`.
///
/// # Example
///
/// ```
/// use imfilt_image::{neighborhood_3x3, Image};
///
/// let image = Image::<u8, 4>::from_size_val([3, 3].into(), 7).unwrap();
///
/// assert_eq!(neighborhood_3x3(&image, 1, 1).count(), 9);
/// assert_eq!(neighborhood_3x3(&image, 0, 0).count(), 4);
/// assert_eq!(neighborhood_3x3(&image, 1, 0).count(), 6);
/// ```
pub fn neighborhood_3x3<T, const C: usize>(
    src: &Image<T, C>,
    x: usize,
    y: usize,
) -> Neighborhood3x3<'_, T, C> {
    Neighborhood3x3 { src, x, y, tap: 0 }
}
