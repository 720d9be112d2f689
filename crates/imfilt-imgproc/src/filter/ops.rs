use imfilt_image::{neighborhood_3x3, Image, ImageError};

use super::kernels::{self, Kernel};

const RED: usize = 0;
const ALPHA: usize = 3;

/// Convert a filter response to a byte: round half to even, then saturate.
#[inline]
fn saturate_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

fn check_same_size<const C: usize>(
    src: &Image<u8, C>,
    dst: &Image<u8, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }
    Ok(())
}

/// Calls `f(x, y, src_pixel, dst_pixel)` for every pixel in row-major order.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
fn for_each_pixel_mut(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    mut f: impl FnMut(usize, usize, &[u8], &mut [u8]),
) {
    // an empty buffer may still declare a huge width, keep the row stride in range
    if src.as_slice().is_empty() {
        return;
    }
    let stride = 4 * src.cols();
    src.as_slice()
        .chunks_exact(stride)
        .zip(dst.as_slice_mut().chunks_exact_mut(stride))
        .enumerate()
        .for_each(|(y, (src_row, dst_row))| {
            src_row
                .chunks_exact(4)
                .zip(dst_row.chunks_exact_mut(4))
                .enumerate()
                .for_each(|(x, (src_pixel, dst_pixel))| f(x, y, src_pixel, dst_pixel));
        });
}

/// Magnitude of a gradient, `sqrt(gx² + gy²)`, saturated to a byte.
///
/// # Example
///
/// ```
/// use imfilt_imgproc::filter::gradient_magnitude;
///
/// assert_eq!(gradient_magnitude(3, 4), 5);
/// assert_eq!(gradient_magnitude(-1020, 0), 255);
/// ```
pub fn gradient_magnitude(gx: i32, gy: i32) -> u8 {
    let (gx, gy) = (gx as f64, gy as f64);
    saturate_u8((gx * gx + gy * gy).sqrt())
}

/// Blur an RGBA image with the 3x3 binomial kernel.
///
/// R, G and B are filtered independently and alpha is copied. Taps outside the
/// image are left out of the sum but the divisor stays at 16, so border pixels
/// come out darker than their neighborhood.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 4).
/// * `dst` - The destination image with shape (H, W, 4).
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Example
///
/// ```
/// use imfilt_image::{Image, ImageSize};
/// use imfilt_imgproc::filter::gaussian_blur_3x3;
///
/// let src = Image::<u8, 4>::from_size_val([3, 3].into(), 160).unwrap();
/// let mut dst = Image::<u8, 4>::from_size_val(src.size(), 0).unwrap();
///
/// gaussian_blur_3x3(&src, &mut dst).unwrap();
///
/// assert_eq!(dst.get_pixel(1, 1, 0).unwrap(), &160);
/// assert_eq!(dst.get_pixel(0, 0, 0).unwrap(), &90);
/// assert_eq!(dst.get_pixel(0, 0, 3).unwrap(), &160);
/// ```
pub fn gaussian_blur_3x3(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let kernel = kernels::GAUSSIAN_3X3;
    let divisor = kernel.divisor as f64;

    for_each_pixel_mut(src, dst, |x, y, src_pixel, dst_pixel| {
        let mut sum = [0i32; 3];
        for (ky, kx, tap) in neighborhood_3x3(src, x, y) {
            let w = kernel.weight(ky, kx);
            for (acc, &v) in sum.iter_mut().zip(tap.iter()) {
                *acc += w * v as i32;
            }
        }

        for (out, acc) in dst_pixel.iter_mut().zip(sum.iter()) {
            *out = saturate_u8(*acc as f64 / divisor);
        }
        dst_pixel[ALPHA] = src_pixel[ALPHA];
    });

    Ok(())
}

/// Shared body of the edge detectors.
///
/// Both gradients are computed on the red channel only and their magnitude is
/// written to R, G and B. Out-of-bounds taps are skipped without renormalizing.
fn gradient_filter(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    kernel_x: &Kernel,
    kernel_y: &Kernel,
) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    for_each_pixel_mut(src, dst, |x, y, src_pixel, dst_pixel| {
        let (mut gx, mut gy) = (0i32, 0i32);
        for (ky, kx, tap) in neighborhood_3x3(src, x, y) {
            let intensity = tap[RED] as i32;
            gx += kernel_x.weight(ky, kx) * intensity;
            gy += kernel_y.weight(ky, kx) * intensity;
        }

        let magnitude = gradient_magnitude(gx, gy);
        dst_pixel[..ALPHA].fill(magnitude);
        dst_pixel[ALPHA] = src_pixel[ALPHA];
    });

    Ok(())
}

/// Compute the Sobel edge map of an RGBA image.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 4).
/// * `dst` - The destination image with shape (H, W, 4), a grayscale edge map
///   with the source alpha.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn sobel(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    gradient_filter(src, dst, &kernels::SOBEL_X, &kernels::SOBEL_Y)
}

/// Compute the Prewitt edge map of an RGBA image.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 4).
/// * `dst` - The destination image with shape (H, W, 4), a grayscale edge map
///   with the source alpha.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn prewitt(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    gradient_filter(src, dst, &kernels::PREWITT_X, &kernels::PREWITT_Y)
}

/// Apply a 3x3 median filter to the red channel of an RGBA image.
///
/// The red values of the in-bounds taps are sorted and the one at index
/// `count / 2` is written to R, G and B. Alpha is copied.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 4).
/// * `dst` - The destination image with shape (H, W, 4).
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn median_blur_3x3(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    check_same_size(src, dst)?;

    let mut window = [0u8; 9];

    for_each_pixel_mut(src, dst, |x, y, src_pixel, dst_pixel| {
        let mut count = 0;
        for (_, _, tap) in neighborhood_3x3(src, x, y) {
            window[count] = tap[RED];
            count += 1;
        }

        let taps = &mut window[..count];
        taps.sort_unstable();
        let median = taps[count / 2];

        dst_pixel[..ALPHA].fill(median);
        dst_pixel[ALPHA] = src_pixel[ALPHA];
    });

    Ok(())
}
