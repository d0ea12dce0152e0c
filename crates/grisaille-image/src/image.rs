use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use grisaille_image::ImageSize;
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

/// Represents a single-channel 8-bit grayscale image.
///
/// Pixel data is stored row-major, one byte per pixel. The dimensions are
/// strictly positive and the data length always equals `width * height`.
/// Operations over images never mutate their input; they allocate and
/// return a new buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    size: ImageSize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or if the length of the
    /// pixel data does not match the image size.
    ///
    /// # Examples
    ///
    /// ```
    /// use grisaille_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::InvalidImageSize(size.width, size.height));
        }

        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn from_size_val(size: ImageSize, val: u8) -> Result<Self, ImageError> {
        let data = vec![val; size.width * size.height];
        GrayImage::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the pixel value at the given coordinates.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use grisaille_image::{GrayImage, ImageSize};
    ///
    /// let image = GrayImage::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 2,
    ///     },
    ///     vec![0u8, 1, 2, 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.get(1, 1), Some(3));
    /// assert_eq!(image.get(2, 0), None);
    /// ```
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        Some(self.data[y * self.width() + x])
    }

    /// Get the pixel data as a slice, row-major.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the pixel data as a mutable slice, row-major.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return the pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{GrayImage, ImageSize};
    use crate::ImageError;

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.rows(), 20);
        assert_eq!(image.cols(), 10);

        Ok(())
    }

    #[test]
    fn image_from_size_val() -> Result<(), ImageError> {
        let image = GrayImage::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            7,
        )?;
        assert_eq!(image.as_slice(), &[7u8; 6]);

        Ok(())
    }

    #[test]
    fn image_zero_dimension() {
        let res = GrayImage::new(
            ImageSize {
                width: 0,
                height: 20,
            },
            vec![],
        );
        assert!(matches!(res, Err(ImageError::InvalidImageSize(0, 20))));
    }

    #[test]
    fn image_data_length_mismatch() {
        let res = GrayImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 3],
        );
        assert!(matches!(res, Err(ImageError::InvalidDataLength(3, 4))));
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        let image = GrayImage::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0, 1, 2, 3, 4, 5],
        )?;
        assert_eq!(image.get(0, 0), Some(0));
        assert_eq!(image.get(1, 2), Some(5));
        assert_eq!(image.get(0, 3), None);

        Ok(())
    }
}
