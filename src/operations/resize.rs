use image::{DynamicImage, RgbImage};
use pic_scale_safe::{resize_rgb8, ImageSize};

use crate::arg_parsers::{Filter, TargetSize};
use crate::utils::fraction::AspectRatio;
use crate::{error::ResizeError, rs_err, rs_try};

/// Resizes to exactly `target`, ignoring the aspect ratio.
pub fn resize(image: &mut DynamicImage, target: &TargetSize, filter: Filter) -> Result<(), ResizeError> {
    resize_impl(image, target.width, target.height, filter)
}

/// Shrinks to fit within `bounds` keeping the aspect ratio. Never enlarges.
pub fn fit(image: &mut DynamicImage, bounds: &TargetSize, filter: Filter) -> Result<(), ResizeError> {
    match fit_within(image.width(), image.height(), bounds) {
        Some((dst_width, dst_height)) => resize_impl(image, dst_width, dst_height, filter),
        None => Ok(()),
    }
}

/// Dimensions a `width`x`height` image should be resized to so that it fits within `bounds`,
/// or `None` if it already fits and must be left untouched.
///
/// The side that limits the fit is set to the bound exactly and the other one
/// is scaled by the image's aspect ratio, truncating towards zero.
pub fn fit_within(width: u32, height: u32, bounds: &TargetSize) -> Option<(u32, u32)> {
    if width <= bounds.width && height <= bounds.height {
        return None;
    }
    let source = AspectRatio::new(width, height);
    let target = AspectRatio::new(bounds.width, bounds.height);
    let (dst_width, dst_height) = match source.cmp(&target) {
        std::cmp::Ordering::Equal => (bounds.width, bounds.height),
        std::cmp::Ordering::Greater => (bounds.width, source.height_for(bounds.width)),
        std::cmp::Ordering::Less => (source.width_for(bounds.height), bounds.height),
    };
    // extremely thin images would otherwise truncate to zero pixels
    Some((dst_width.max(1), dst_height.max(1)))
}

fn resize_impl(
    image: &mut DynamicImage,
    dst_width: u32,
    dst_height: u32,
    filter: Filter,
) -> Result<(), ResizeError> {
    if image.width() == dst_width && image.height() == dst_height {
        return Ok(());
    }
    let src = image.to_rgb8();
    let src_size = ImageSize::new(src.width() as usize, src.height() as usize);
    let dst_size = ImageSize::new(dst_width as usize, dst_height as usize);
    let resized = rs_try!(
        Resize,
        resize_rgb8(src.as_raw(), src_size, dst_size, filter.into_resize())
    );
    let dst = RgbImage::from_raw(dst_width, dst_height, resized).ok_or_else(|| {
        rs_err!(
            Resize,
            "resampler returned a buffer of the wrong size for {dst_width}x{dst_height}"
        )
    })?;
    *image = DynamicImage::ImageRgb8(dst);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utils::arbitrary;
    use quickcheck::{Arbitrary, Gen, TestResult};
    use quickcheck_macros::quickcheck;

    fn bounds(width: u32, height: u32) -> TargetSize {
        TargetSize::new(width, height).unwrap()
    }

    #[derive(Debug, Clone, Copy)]
    struct Dimensions(u32, u32);

    impl Arbitrary for Dimensions {
        fn arbitrary(g: &mut Gen) -> Self {
            Dimensions(arbitrary::positive_u32(g), arbitrary::positive_u32(g))
        }
    }

    #[test]
    fn test_small_image_untouched() {
        assert_eq!(fit_within(800, 600, &bounds(800, 600)), None);
        assert_eq!(fit_within(10, 600, &bounds(800, 600)), None);
        assert_eq!(fit_within(1, 1, &bounds(800, 600)), None);
    }

    #[test]
    fn test_same_ratio_hits_bounds_exactly() {
        assert_eq!(fit_within(1600, 1200, &bounds(800, 600)), Some((800, 600)));
        assert_eq!(fit_within(801, 601, &bounds(801, 601)), None);
        assert_eq!(fit_within(4000, 3000, &bounds(4, 3)), Some((4, 3)));
    }

    #[test]
    fn test_wider_image() {
        // 2000/1000 = 2 > 800/600; height is 800 / 2
        assert_eq!(fit_within(2000, 1000, &bounds(800, 600)), Some((800, 400)));
        // 1000/700 > 4/3; 800 * 700 / 1000 = 560
        assert_eq!(fit_within(1000, 700, &bounds(800, 600)), Some((800, 560)));
        // only the width exceeds the bound
        assert_eq!(fit_within(900, 100, &bounds(800, 600)), Some((800, 88)));
    }

    #[test]
    fn test_taller_image() {
        // 600 * 1000 / 2000 = 300
        assert_eq!(fit_within(1000, 2000, &bounds(800, 600)), Some((300, 600)));
        // 600 * 333 / 1000 = 199.8, truncated
        assert_eq!(fit_within(333, 1000, &bounds(800, 600)), Some((199, 600)));
    }

    #[test]
    fn test_degenerate_image_keeps_one_pixel() {
        assert_eq!(fit_within(100_000, 1, &bounds(800, 600)), Some((800, 1)));
    }

    #[quickcheck]
    fn fitting_images_keep_dimensions(image: Dimensions, bounds: TargetSize) -> TestResult {
        let Dimensions(width, height) = image;
        if width > bounds.width || height > bounds.height {
            return TestResult::discard();
        }
        TestResult::from_bool(fit_within(width, height, &bounds).is_none())
    }

    #[quickcheck]
    fn oversized_images_fit_and_touch_a_bound(image: Dimensions, bounds: TargetSize) -> TestResult {
        let Dimensions(width, height) = image;
        let Some((dst_width, dst_height)) = fit_within(width, height, &bounds) else {
            return TestResult::from_bool(width <= bounds.width && height <= bounds.height);
        };
        let source = AspectRatio::new(width, height);
        let target = AspectRatio::new(bounds.width, bounds.height);
        let ok = match source.cmp(&target) {
            std::cmp::Ordering::Equal => (dst_width, dst_height) == (bounds.width, bounds.height),
            std::cmp::Ordering::Greater => {
                dst_width == bounds.width
                    && dst_height <= bounds.height
                    && u64::from(dst_height)
                        == (u64::from(bounds.width) * u64::from(height) / u64::from(width)).max(1)
            }
            std::cmp::Ordering::Less => {
                dst_height == bounds.height
                    && dst_width <= bounds.width
                    && u64::from(dst_width)
                        == (u64::from(bounds.height) * u64::from(width) / u64::from(height)).max(1)
            }
        };
        TestResult::from_bool(ok)
    }

    #[test]
    fn test_exact_resize_ignores_aspect_ratio() {
        let mut image = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 10, image::Rgb([9, 9, 9])));
        resize(&mut image, &bounds(8, 6), Filter::Bicubic).unwrap();
        assert_eq!((image.width(), image.height()), (8, 6));
    }

    #[test]
    fn test_exact_resize_enlarges() {
        let mut image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, image::Rgb([200, 0, 0])));
        resize(&mut image, &bounds(30, 25), Filter::Lanczos).unwrap();
        assert_eq!((image.width(), image.height()), (30, 25));
    }

    #[test]
    fn test_fit_resizes_pixels() {
        let mut image = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 20, image::Rgb([0, 90, 0])));
        fit(&mut image, &bounds(10, 10), Filter::Lanczos).unwrap();
        assert_eq!((image.width(), image.height()), (10, 4));

        let mut small = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 5, image::Rgb([1, 1, 1])));
        fit(&mut small, &bounds(10, 10), Filter::Lanczos).unwrap();
        assert_eq!((small.width(), small.height()), (5, 5));
    }

    #[quickcheck]
    fn fit_output_matches_computed_size(width: u8, height: u8, max: u8) -> TestResult {
        let (width, height, max) = (u32::from(width), u32::from(height), u32::from(max));
        if width == 0 || height == 0 || max == 0 {
            return TestResult::discard();
        }
        let bounds = bounds(max, max);
        let mut image = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        if fit(&mut image, &bounds, Filter::Bilinear).is_err() {
            return TestResult::failed();
        }
        let expected = fit_within(width, height, &bounds).unwrap_or((width, height));
        TestResult::from_bool((image.width(), image.height()) == expected)
    }
}
