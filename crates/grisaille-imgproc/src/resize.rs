use grisaille_image::{GrayImage, ImageError, ImageSize};

use crate::interpolation::{
    bilinear_interpolation, nearest_neighbor_interpolation, InterpolationMode,
};

/// Resize an image to a new size.
///
/// The function resizes an image to a new size using the specified
/// interpolation mode and returns the resized image as a new buffer.
///
/// The two modes use different coordinate conventions:
///
/// * Nearest neighbor maps forward with `sx = src_width / dst_width` and
///   samples the truncated source coordinate.
/// * Bilinear aligns the corner samples with `sx = (src_width - 1) /
///   (dst_width - 1)`; a target axis of length 1 collapses the scale to 0
///   so every sample along that axis comes from source index 0.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_size` - The size of the output image.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns an error if either target dimension is zero.
///
/// # Example
///
/// ```
/// use grisaille_image::{GrayImage, ImageSize};
/// use grisaille_imgproc::interpolation::InterpolationMode;
/// use grisaille_imgproc::resize::resize;
///
/// let image = GrayImage::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     128,
/// )
/// .unwrap();
///
/// let resized = resize(
///     &image,
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize(
    src: &GrayImage,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<GrayImage, ImageError> {
    if new_size.width == 0 || new_size.height == 0 {
        return Err(ImageError::InvalidImageSize(
            new_size.width,
            new_size.height,
        ));
    }

    match interpolation {
        InterpolationMode::Nearest => resize_nearest(src, new_size),
        InterpolationMode::Bilinear => resize_bilinear(src, new_size),
    }
}

fn resize_nearest(src: &GrayImage, new_size: ImageSize) -> Result<GrayImage, ImageError> {
    // forward mapping: destination (i, j) samples floor(j * sx), floor(i * sy)
    let sx = src.width() as f64 / new_size.width as f64;
    let sy = src.height() as f64 / new_size.height as f64;

    let mut data = Vec::with_capacity(new_size.width * new_size.height);
    for i in 0..new_size.height {
        for j in 0..new_size.width {
            let u = j as f64 * sx;
            let v = i as f64 * sy;
            data.push(nearest_neighbor_interpolation(src, u, v));
        }
    }

    GrayImage::new(new_size, data)
}

fn resize_bilinear(src: &GrayImage, new_size: ImageSize) -> Result<GrayImage, ImageError> {
    // corner-aligned mapping; a length-1 target axis samples the source edge
    let sx = if new_size.width > 1 {
        (src.width() - 1) as f64 / (new_size.width - 1) as f64
    } else {
        0.0
    };
    let sy = if new_size.height > 1 {
        (src.height() - 1) as f64 / (new_size.height - 1) as f64
    } else {
        0.0
    };

    let mut data = Vec::with_capacity(new_size.width * new_size.height);
    for i in 0..new_size.height {
        for j in 0..new_size.width {
            let u = j as f64 * sx;
            let v = i as f64 * sy;
            // the narrowing cast truncates toward zero, never rounds
            data.push(bilinear_interpolation(src, u, v) as u8);
        }
    }

    GrayImage::new(new_size, data)
}

#[cfg(test)]
mod tests {
    use grisaille_image::{GrayImage, ImageError, ImageSize};

    use super::resize;
    use crate::interpolation::InterpolationMode;

    fn gradient_4x4() -> Result<GrayImage, ImageError> {
        GrayImage::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            vec![
                0, 10, 20, 30, //
                40, 50, 60, 70, //
                80, 90, 100, 110, //
                120, 130, 140, 150,
            ],
        )
    }

    #[test]
    fn resize_smoke() -> Result<(), ImageError> {
        let image = GrayImage::from_size_val(
            ImageSize {
                width: 4,
                height: 5,
            },
            0,
        )?;

        let resized = resize(
            &image,
            ImageSize {
                width: 2,
                height: 3,
            },
            InterpolationMode::Bilinear,
        )?;

        assert_eq!(resized.size().width, 2);
        assert_eq!(resized.size().height, 3);

        Ok(())
    }

    #[test]
    fn resize_nearest_downsample() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let resized = resize(
            &image,
            ImageSize {
                width: 2,
                height: 2,
            },
            InterpolationMode::Nearest,
        )?;

        assert_eq!(resized.as_slice(), &[0, 20, 80, 100]);

        Ok(())
    }

    #[test]
    fn resize_nearest_upsample() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;

        let resized = resize(
            &image,
            ImageSize {
                width: 4,
                height: 4,
            },
            InterpolationMode::Nearest,
        )?;

        assert_eq!(
            resized.as_slice(),
            &[
                1, 1, 2, 2, //
                1, 1, 2, 2, //
                3, 3, 4, 4, //
                3, 3, 4, 4,
            ]
        );

        Ok(())
    }

    #[test]
    fn resize_bilinear_corners() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let resized = resize(
            &image,
            ImageSize {
                width: 2,
                height: 2,
            },
            InterpolationMode::Bilinear,
        )?;

        // scale factor 3 on both axes, so only corner points are sampled
        assert_eq!(resized.as_slice(), &[0, 30, 120, 150]);

        Ok(())
    }

    #[test]
    fn resize_bilinear_upsample() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 100, 50, 150],
        )?;

        let resized = resize(
            &image,
            ImageSize {
                width: 3,
                height: 3,
            },
            InterpolationMode::Bilinear,
        )?;

        assert_eq!(
            resized.as_slice(),
            &[
                0, 50, 100, //
                25, 75, 125, //
                50, 100, 150,
            ]
        );

        Ok(())
    }

    #[test]
    fn resize_bilinear_fractional() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let resized = resize(
            &image,
            ImageSize {
                width: 3,
                height: 3,
            },
            InterpolationMode::Bilinear,
        )?;

        assert_eq!(
            resized.as_slice(),
            &[
                0, 15, 30, //
                60, 75, 90, //
                120, 135, 150,
            ]
        );

        Ok(())
    }

    #[test]
    fn resize_identity_reproduces_source() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        for mode in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
            let resized = resize(&image, image.size(), mode)?;
            assert_eq!(resized.as_slice(), image.as_slice());
        }

        Ok(())
    }

    #[test]
    fn resize_constant_stays_constant() -> Result<(), ImageError> {
        let image = GrayImage::from_size_val(
            ImageSize {
                width: 512,
                height: 512,
            },
            77,
        )?;

        let targets = [
            ImageSize {
                width: 128,
                height: 128,
            },
            ImageSize {
                width: 1024,
                height: 512,
            },
            ImageSize {
                width: 31,
                height: 67,
            },
        ];

        for new_size in targets {
            for mode in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
                let resized = resize(&image, new_size, mode)?;
                assert!(resized.as_slice().iter().all(|&v| v == 77));
            }
        }

        Ok(())
    }

    #[test]
    fn resize_bilinear_degenerate_axis() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        // a length-1 target axis collapses the scale to 0 and samples the
        // left edge, not the center
        let resized = resize(
            &image,
            ImageSize {
                width: 1,
                height: 3,
            },
            InterpolationMode::Bilinear,
        )?;

        assert_eq!(resized.as_slice(), &[0, 60, 120]);

        Ok(())
    }

    #[test]
    fn resize_invalid_target() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let res = resize(
            &image,
            ImageSize {
                width: 0,
                height: 3,
            },
            InterpolationMode::Nearest,
        );
        assert!(matches!(res, Err(ImageError::InvalidImageSize(0, 3))));

        Ok(())
    }
}
