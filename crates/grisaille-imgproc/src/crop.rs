use grisaille_image::{GrayImage, ImageError, ImageSize};

/// Crop a region out of an image.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `x` - The x-coordinate of the top-left corner of the region to crop.
/// * `y` - The y-coordinate of the top-left corner of the region to crop.
/// * `size` - The size of the region to crop.
///
/// # Errors
///
/// Returns an error if the region is empty or does not fit inside the
/// source image.
///
/// # Examples
///
/// ```
/// use grisaille_image::{GrayImage, ImageSize};
/// use grisaille_imgproc::crop::crop;
///
/// let image = GrayImage::new(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     vec![
///         0, 1, 2, 3, //
///         4, 5, 6, 7, //
///         8, 9, 10, 11, //
///         12, 13, 14, 15,
///     ],
/// )
/// .unwrap();
///
/// let cropped = crop(
///     &image,
///     1,
///     1,
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
/// )
/// .unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5, 6, 9, 10]);
/// ```
pub fn crop(src: &GrayImage, x: usize, y: usize, size: ImageSize) -> Result<GrayImage, ImageError> {
    if size.width == 0 || size.height == 0 {
        return Err(ImageError::InvalidImageSize(size.width, size.height));
    }

    if x + size.width > src.width() || y + size.height > src.height() {
        return Err(ImageError::CropOutOfBounds(x, y, size.width, size.height));
    }

    let src_data = src.as_slice();
    let mut data = Vec::with_capacity(size.width * size.height);
    for row in 0..size.height {
        let offset = (y + row) * src.width() + x;
        data.extend_from_slice(&src_data[offset..offset + size.width]);
    }

    GrayImage::new(size, data)
}

/// Crop a region of the given size out of the center of an image.
///
/// The top-left corner of the region is `(width / 2 - size.width / 2,
/// height / 2 - size.height / 2)`, using integer division. Useful for
/// inspecting the center patch of an image, e.g. the 10x10 pixel dump of
/// the demo pipeline.
///
/// # Errors
///
/// Returns an error if the region is empty or larger than the source.
pub fn center_crop(src: &GrayImage, size: ImageSize) -> Result<GrayImage, ImageError> {
    if size.width > src.width() || size.height > src.height() {
        return Err(ImageError::CropOutOfBounds(0, 0, size.width, size.height));
    }

    let x = src.width() / 2 - size.width / 2;
    let y = src.height() / 2 - size.height / 2;

    crop(src, x, y, size)
}

#[cfg(test)]
mod tests {
    use grisaille_image::{GrayImage, ImageError, ImageSize};

    fn gradient_4x4() -> Result<GrayImage, ImageError> {
        GrayImage::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).collect(),
        )
    }

    #[test]
    fn test_crop() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let cropped = super::crop(
            &image,
            2,
            1,
            ImageSize {
                width: 2,
                height: 3,
            },
        )?;

        assert_eq!(cropped.as_slice(), &[6, 7, 10, 11, 14, 15]);

        Ok(())
    }

    #[test]
    fn test_crop_out_of_bounds() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let res = super::crop(
            &image,
            3,
            0,
            ImageSize {
                width: 2,
                height: 2,
            },
        );
        assert!(matches!(res, Err(ImageError::CropOutOfBounds(3, 0, 2, 2))));

        Ok(())
    }

    #[test]
    fn test_center_crop() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let cropped = super::center_crop(
            &image,
            ImageSize {
                width: 2,
                height: 2,
            },
        )?;

        assert_eq!(cropped.as_slice(), &[5, 6, 9, 10]);

        Ok(())
    }

    #[test]
    fn test_center_crop_full_image() -> Result<(), ImageError> {
        let image = gradient_4x4()?;

        let cropped = super::center_crop(&image, image.size())?;
        assert_eq!(cropped.as_slice(), image.as_slice());

        Ok(())
    }
}
