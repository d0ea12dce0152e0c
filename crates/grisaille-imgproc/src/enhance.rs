use grisaille_image::{GrayImage, ImageError};

/// Apply a precomputed 8-bit lookup table to every pixel of an image.
fn apply_lut(src: &GrayImage, lut: &[u8; 256]) -> Result<GrayImage, ImageError> {
    let data = src.as_slice().iter().map(|&v| lut[v as usize]).collect();
    GrayImage::new(src.size(), data)
}

/// Compute the negative of an image.
///
/// Each pixel is mapped to `255 - v`. The operation is integer-exact and
/// applying it twice reproduces the input.
///
/// # Example
///
/// ```
/// use grisaille_image::{GrayImage, ImageSize};
/// use grisaille_imgproc::enhance::negative;
///
/// let image = GrayImage::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![0, 10, 255],
/// )
/// .unwrap();
///
/// let inverted = negative(&image).unwrap();
///
/// assert_eq!(inverted.as_slice(), &[255, 245, 0]);
/// ```
pub fn negative(src: &GrayImage) -> Result<GrayImage, ImageError> {
    let mut lut = [0u8; 256];
    for (i, out) in lut.iter_mut().enumerate() {
        *out = 255 - i as u8;
    }

    apply_lut(src, &lut)
}

/// Apply a gamma transform to an image.
///
/// Each pixel is normalized to `[0, 1]`, raised to the power `gamma` and
/// rescaled to `[0, 255]` with truncation toward zero. `gamma` is expected
/// to be positive; `gamma = 1.0` is the identity up to one unit of float
/// round-trip error.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `gamma` - The exponent applied to the normalized intensities.
///
/// # Example
///
/// ```
/// use grisaille_image::{GrayImage, ImageSize};
/// use grisaille_imgproc::enhance::gamma_transform;
///
/// let image = GrayImage::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![0, 128, 255],
/// )
/// .unwrap();
///
/// let adjusted = gamma_transform(&image, 2.0).unwrap();
///
/// assert_eq!(adjusted.as_slice(), &[0, 64, 255]);
/// ```
pub fn gamma_transform(src: &GrayImage, gamma: f64) -> Result<GrayImage, ImageError> {
    let mut lut = [0u8; 256];
    for (i, out) in lut.iter_mut().enumerate() {
        let x = i as f64 / 255.0;
        *out = (x.powf(gamma) * 255.0) as u8;
    }

    apply_lut(src, &lut)
}

/// Apply a log transform to an image.
///
/// Each pixel is mapped to `ln(1 + v / 255)` and the result is rescaled so
/// that the image's own maximum maps to 255. The normalization is adaptive
/// per image, not a fixed curve: darker images get a steeper boost. An
/// all-zero input has a zero maximum and is returned as an all-zero image
/// instead of dividing by it.
///
/// # Example
///
/// ```
/// use grisaille_image::{GrayImage, ImageSize};
/// use grisaille_imgproc::enhance::log_transform;
///
/// let image = GrayImage::new(
///     ImageSize {
///         width: 3,
///         height: 1,
///     },
///     vec![0, 64, 128],
/// )
/// .unwrap();
///
/// let boosted = log_transform(&image).unwrap();
///
/// assert_eq!(boosted.as_slice(), &[0, 140, 255]);
/// ```
pub fn log_transform(src: &GrayImage) -> Result<GrayImage, ImageError> {
    let max = src.as_slice().iter().copied().max().unwrap_or(0);
    if max == 0 {
        return GrayImage::from_size_val(src.size(), 0);
    }

    let denom = (1.0 + max as f64 / 255.0).ln();

    let mut lut = [0u8; 256];
    for (i, out) in lut.iter_mut().enumerate() {
        let x = (1.0 + i as f64 / 255.0).ln();
        *out = (x / denom * 255.0) as u8;
    }

    apply_lut(src, &lut)
}
