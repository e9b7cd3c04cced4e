//! Tests for grid-shape derivation and nearest-pixel block sampling

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use mosatile::MosaicError;
    use mosatile::engine::sampler::{compute_grid, derive_resolution};

    // Tests the requested shape passes through with auto-resize off
    // Verified by always recomputing the column count
    #[test]
    fn test_derive_resolution_fixed() {
        assert_eq!(derive_resolution(400, 200, (50, 75), false), (50, 75));
    }

    // Tests auto-resize recomputes columns from the aspect ratio
    // Verified by scaling rows instead of columns
    #[test]
    fn test_derive_resolution_auto() {
        assert_eq!(derive_resolution(400, 200, (50, 50), true), (50, 100));
        assert_eq!(derive_resolution(200, 400, (50, 50), true), (50, 25));
        assert_eq!(derive_resolution(300, 300, (40, 7), true), (40, 40));
    }

    // Tests derived column counts never drop below one
    // Verified by letting extreme aspect ratios round to zero
    #[test]
    fn test_derive_resolution_minimum_one_column() {
        assert_eq!(derive_resolution(1, 1000, (1, 50), true), (1, 1));
    }

    // Tests cells take single pixels with no averaging
    // Verified by averaging each block before sampling
    #[test]
    fn test_nearest_pixel_sampling() {
        let mut frame = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        for y in 0..4 {
            for x in 0..4 {
                let quadrant = u8::try_from((y / 2) * 2 + x / 2).unwrap();
                frame.put_pixel(x, y, Rgb([quadrant * 10, 0, 0]));
            }
        }
        // A lone outlier at a sample point must pass through untouched
        frame.put_pixel(2, 2, Rgb([255, 255, 255]));

        let template = compute_grid(&frame, (2, 2), false).unwrap();

        assert_eq!(template.dim(), (2, 2));
        assert_eq!(template[[0, 0]], Rgb([0, 0, 0]));
        assert_eq!(template[[0, 1]], Rgb([10, 0, 0]));
        assert_eq!(template[[1, 0]], Rgb([20, 0, 0]));
        assert_eq!(template[[1, 1]], Rgb([255, 255, 255]));
    }

    // Tests sample coordinates clamp to the frame bounds
    // Verified by letting strides index past the last pixel
    #[test]
    fn test_sampling_clamps_to_frame() {
        let mut frame = RgbImage::new(1, 2);
        frame.put_pixel(0, 0, Rgb([255, 255, 255]));
        frame.put_pixel(0, 1, Rgb([0, 0, 0]));

        let template = compute_grid(&frame, (3, 1), false).unwrap();

        assert_eq!(template.dim(), (3, 1));
        assert_eq!(template[[0, 0]], Rgb([255, 255, 255]));
        assert_eq!(template[[1, 0]], Rgb([0, 0, 0]));
        assert_eq!(template[[2, 0]], Rgb([0, 0, 0]));
    }

    // Tests grids denser than the frame repeat pixels via zero strides
    // Verified by rejecting grids larger than the frame
    #[test]
    fn test_grid_denser_than_frame() {
        let frame = RgbImage::from_pixel(2, 2, Rgb([42, 42, 42]));

        let template = compute_grid(&frame, (5, 5), false).unwrap();

        assert_eq!(template.dim(), (5, 5));
        assert!(template.iter().all(|cell| *cell == Rgb([42, 42, 42])));
    }

    // Tests auto-resize flows through to the sampled grid shape
    // Verified by deriving the shape after sampling
    #[test]
    fn test_compute_grid_with_auto_resize() {
        let frame = RgbImage::from_pixel(400, 200, Rgb([7, 7, 7]));

        let template = compute_grid(&frame, (50, 50), true).unwrap();

        assert_eq!(template.dim(), (50, 100));
    }

    // Tests zero rows and zero columns are rejected
    // Verified by allowing degenerate grid shapes
    #[test]
    fn test_zero_shape_rejected() {
        let frame = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));

        assert!(matches!(
            compute_grid(&frame, (0, 5), false),
            Err(MosaicError::InvalidParameter { .. })
        ));
        assert!(matches!(
            compute_grid(&frame, (5, 0), false),
            Err(MosaicError::InvalidParameter { .. })
        ));
    }

    // Tests an empty frame is rejected as invalid source data
    // Verified by sampling the zero-size frame anyway
    #[test]
    fn test_empty_frame_rejected() {
        let frame = RgbImage::new(0, 0);

        assert!(matches!(
            compute_grid(&frame, (2, 2), false),
            Err(MosaicError::InvalidSourceData { .. })
        ));
    }
}
