use std::{fmt, str::FromStr};

use imfilt_image::{Image, ImageError, ImageSize, RasterImage};

use crate::{error::FilterError, filter};

type FilterOp = fn(&RasterImage, &mut RasterImage) -> Result<(), ImageError>;

/// The filters that can be applied to a raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Leave the image untouched.
    #[default]
    None,
    /// 3x3 binomial blur on R, G and B.
    GaussianBlur,
    /// Sobel gradient magnitude of the red channel.
    Sobel,
    /// Prewitt gradient magnitude of the red channel.
    Prewitt,
    /// 3x3 median of the red channel.
    MedianFilter,
}

impl FilterKind {
    /// Every filter, in presentation order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::None,
        FilterKind::GaussianBlur,
        FilterKind::Sobel,
        FilterKind::Prewitt,
        FilterKind::MedianFilter,
    ];

    /// Canonical name of the filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::None => "None",
            FilterKind::GaussianBlur => "GaussianBlur",
            FilterKind::Sobel => "Sobel",
            FilterKind::Prewitt => "Prewitt",
            FilterKind::MedianFilter => "MedianFilter",
        }
    }

    /// The operation implementing the filter, `None` for the identity.
    fn op(&self) -> Option<FilterOp> {
        match self {
            FilterKind::None => None,
            FilterKind::GaussianBlur => Some(filter::gaussian_blur_3x3),
            FilterKind::Sobel => Some(filter::sobel),
            FilterKind::Prewitt => Some(filter::prewitt),
            FilterKind::MedianFilter => Some(filter::median_blur_3x3),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Parse a filter name, ignoring case.
    ///
    /// Besides the canonical names, `gaussian` and `median` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(FilterKind::None),
            "gaussianblur" | "gaussian" => Ok(FilterKind::GaussianBlur),
            "sobel" => Ok(FilterKind::Sobel),
            "prewitt" => Ok(FilterKind::Prewitt),
            "medianfilter" | "median" => Ok(FilterKind::MedianFilter),
            _ => Err(FilterError::UnsupportedFilter(s.to_string())),
        }
    }
}

/// Apply a filter to an RGBA raster.
///
/// The source is never modified; the result is a new image with the same size.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 4).
/// * `kind` - The filter to apply.
///
/// # Returns
///
/// The filtered image.
///
/// # Example
///
/// ```
/// use imfilt_image::{Image, ImageSize};
/// use imfilt_imgproc::{apply_filter, FilterKind};
///
/// let image = Image::<u8, 4>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     200,
/// )
/// .unwrap();
///
/// let blurred = apply_filter(&image, FilterKind::GaussianBlur).unwrap();
///
/// assert_eq!(blurred.size(), image.size());
/// assert_eq!(blurred.get_pixel(1, 1, 0).unwrap(), &200);
/// ```
pub fn apply_filter(src: &RasterImage, kind: FilterKind) -> Result<RasterImage, FilterError> {
    let start = std::time::Instant::now();

    let dst = match kind.op() {
        None => src.clone(),
        Some(op) => {
            let mut dst = Image::from_size_val(src.size(), 0u8)?;
            op(src, &mut dst)?;
            dst
        }
    };

    log::debug!(
        "applied {} to {} in {:?}",
        kind,
        src.size(),
        start.elapsed()
    );

    Ok(dst)
}

/// Apply a filter to a raw RGBA buffer.
///
/// The buffer is validated against `width * height * 4` before any pixel is
/// touched.
///
/// # Errors
///
/// Returns [`FilterError::InvalidImage`] if the buffer length does not match the
/// declared size or the declared size overflows.
///
/// # Example
///
/// ```
/// use imfilt_imgproc::{apply_filter_raw, FilterError, FilterKind};
///
/// let out = apply_filter_raw(1, 1, &[1, 2, 3, 4], FilterKind::None).unwrap();
/// assert_eq!(out.as_slice(), &[1, 2, 3, 4]);
///
/// let err = apply_filter_raw(2, 2, &[0; 4], FilterKind::Sobel);
/// assert!(matches!(err, Err(FilterError::InvalidImage(_))));
/// ```
pub fn apply_filter_raw(
    width: usize,
    height: usize,
    pixels: &[u8],
    kind: FilterKind,
) -> Result<RasterImage, FilterError> {
    let src = Image::new(ImageSize { width, height }, pixels.to_vec())?;
    apply_filter(&src, kind)
}
