use imfilt_image::{Image, ImageSize, RasterImage};
use imfilt_imgproc::{apply_filter, FilterError, FilterKind};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn uniform(width: usize, height: usize, rgba: [u8; 4]) -> Result<RasterImage, FilterError> {
    let data = rgba.repeat(width * height);
    Ok(Image::new(ImageSize { width, height }, data)?)
}

fn random_image(width: usize, height: usize, seed: u64) -> Result<RasterImage, FilterError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height * 4).map(|_| rng.random::<u8>()).collect();
    Ok(Image::new(ImageSize { width, height }, data)?)
}

fn rgba(image: &RasterImage, x: usize, y: usize) -> [u8; 4] {
    let px = image.pixel(x, y).unwrap_or_default();
    [px[0], px[1], px[2], px[3]]
}

fn is_border(image: &RasterImage, x: usize, y: usize) -> bool {
    x == 0 || y == 0 || x + 1 == image.width() || y + 1 == image.height()
}

#[test]
fn every_filter_preserves_size_and_alpha() -> Result<(), FilterError> {
    for (width, height) in [(1, 1), (1, 5), (5, 1), (7, 4), (16, 9)] {
        let src = random_image(width, height, 7)?;

        for kind in FilterKind::ALL {
            let dst = apply_filter(&src, kind)?;
            assert_eq!(dst.size(), src.size());
            assert_eq!(dst.as_slice().len(), src.as_slice().len());

            let alpha_in = src.as_slice().iter().skip(3).step_by(4);
            let alpha_out = dst.as_slice().iter().skip(3).step_by(4);
            assert!(alpha_in.eq(alpha_out), "{kind} changed alpha");
        }
    }
    Ok(())
}

#[test]
fn none_is_identity() -> Result<(), FilterError> {
    let src = random_image(13, 11, 42)?;
    let dst = apply_filter(&src, FilterKind::None)?;
    assert_eq!(dst.as_slice(), src.as_slice());
    Ok(())
}

#[test]
fn filters_do_not_modify_source() -> Result<(), FilterError> {
    let src = random_image(6, 6, 3)?;
    let copy = src.clone();
    for kind in FilterKind::ALL {
        apply_filter(&src, kind)?;
    }
    assert_eq!(src, copy);
    Ok(())
}

#[test]
fn gaussian_blur_uniform_interior_is_fixed_point() -> Result<(), FilterError> {
    let src = uniform(5, 5, [100, 150, 200, 77])?;
    let dst = apply_filter(&src, FilterKind::GaussianBlur)?;

    for y in 1..4 {
        for x in 1..4 {
            assert_eq!(rgba(&dst, x, y), [100, 150, 200, 77]);
        }
    }

    // the divisor stays at 16 on the border: 12/16 on edges, 9/16 on corners
    assert_eq!(rgba(&dst, 2, 0), [75, 112, 150, 77]);
    assert_eq!(rgba(&dst, 0, 2), [75, 112, 150, 77]);
    assert_eq!(rgba(&dst, 0, 0), [56, 84, 112, 77]);
    assert_eq!(rgba(&dst, 4, 4), [56, 84, 112, 77]);

    for y in 0..5 {
        for x in 0..5 {
            if is_border(&dst, x, y) {
                let px = rgba(&dst, x, y);
                assert!(px[0] < 100 && px[1] < 150 && px[2] < 200);
            }
        }
    }
    Ok(())
}

#[test]
fn edge_detectors_uniform_interior_is_zero() -> Result<(), FilterError> {
    let src = uniform(6, 5, [10, 90, 200, 255])?;

    for kind in [FilterKind::Sobel, FilterKind::Prewitt] {
        let dst = apply_filter(&src, kind)?;
        for y in 1..4 {
            for x in 1..5 {
                assert_eq!(rgba(&dst, x, y), [0, 0, 0, 255], "{kind} at ({x}, {y})");
            }
        }
    }

    // missing taps on the border leave a residual gradient
    let sobel = apply_filter(&src, FilterKind::Sobel)?;
    assert_eq!(rgba(&sobel, 0, 0), [42, 42, 42, 255]);
    assert_eq!(rgba(&sobel, 2, 0), [40, 40, 40, 255]);

    let prewitt = apply_filter(&src, FilterKind::Prewitt)?;
    assert_eq!(rgba(&prewitt, 0, 0), [28, 28, 28, 255]);
    assert_eq!(rgba(&prewitt, 2, 0), [30, 30, 30, 255]);
    Ok(())
}

#[test]
fn median_filter_uniform_is_fixed_point() -> Result<(), FilterError> {
    for (width, height) in [(1, 1), (2, 3), (5, 5)] {
        let src = uniform(width, height, [123, 123, 123, 200])?;
        let dst = apply_filter(&src, FilterKind::MedianFilter)?;
        assert_eq!(dst, src);
    }
    Ok(())
}

fn vertical_split(width: usize, height: usize) -> Result<RasterImage, FilterError> {
    let data = (0..height)
        .flat_map(move |_| {
            (0..width).flat_map(move |x| {
                if x < width / 2 {
                    [0, 0, 0, 255]
                } else {
                    [255, 255, 255, 255]
                }
            })
        })
        .collect();
    Ok(Image::new(ImageSize { width, height }, data)?)
}

#[test]
fn sobel_vertical_split() -> Result<(), FilterError> {
    let src = vertical_split(4, 4)?;
    let dst = apply_filter(&src, FilterKind::Sobel)?;

    for y in 0..4 {
        assert_eq!(rgba(&dst, 0, y), [0, 0, 0, 255]);
        assert!(rgba(&dst, 1, y)[0] > 0);
        assert!(rgba(&dst, 2, y)[0] > 0);
        // the right border loses its bright right-hand taps
        assert!(rgba(&dst, 3, y)[0] > 0);
    }

    // a wider split has columns fully inside each region
    let src = vertical_split(8, 4)?;
    let dst = apply_filter(&src, FilterKind::Sobel)?;
    for y in 1..3 {
        for x in [1, 2, 5, 6] {
            assert_eq!(rgba(&dst, x, y), [0, 0, 0, 255], "({x}, {y})");
        }
        assert_eq!(rgba(&dst, 3, y), [255, 255, 255, 255]);
        assert_eq!(rgba(&dst, 4, y), [255, 255, 255, 255]);
    }
    Ok(())
}

#[test]
fn median_filter_removes_outlier() -> Result<(), FilterError> {
    let mut data = [10, 10, 10, 255].repeat(9);
    data[4 * 4..4 * 4 + 3].copy_from_slice(&[250, 250, 250]);
    let src: RasterImage = Image::new([3, 3].into(), data)?;

    let dst = apply_filter(&src, FilterKind::MedianFilter)?;

    assert_eq!(rgba(&dst, 1, 1), [10, 10, 10, 255]);
    assert_eq!(dst, uniform(3, 3, [10, 10, 10, 255])?);

    // the outlier survives a plain blur
    let blurred = apply_filter(&src, FilterKind::GaussianBlur)?;
    assert!(rgba(&blurred, 1, 1)[0] > 10);
    Ok(())
}
