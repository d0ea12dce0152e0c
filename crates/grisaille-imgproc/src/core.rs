// reference: https://www.strchr.com/standard_deviation_in_one_pass
use grisaille_image::GrayImage;

/// Compute the mean and standard deviation of an image.
///
/// The mean and standard deviation are computed in one pass over the
/// pixel data.
///
/// # Arguments
///
/// * `image` - The input image to compute the mean and standard deviation.
///
/// # Returns
///
/// A tuple containing the standard deviation and the mean of the image,
/// in that order.
///
/// # Example
///
/// ```
/// use grisaille_image::{GrayImage, ImageSize};
/// use grisaille_imgproc::core::std_mean;
///
/// let image = GrayImage::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0, 64, 128, 255],
/// )
/// .unwrap();
///
/// let (std, mean) = std_mean(&image);
///
/// assert_eq!(mean, 111.75);
/// assert!((std - 94.27718440853015).abs() < 1e-9);
/// ```
pub fn std_mean(image: &GrayImage) -> (f64, f64) {
    let (sum, sq_sum) = image
        .as_slice()
        .iter()
        .fold((0f64, 0f64), |(sum, sq_sum), &val| {
            (sum + val as f64, sq_sum + (val as f64).powi(2))
        });

    let n = (image.width() * image.height()) as f64;
    let mean = sum / n;
    let std = (sq_sum / n - mean.powi(2)).sqrt();

    (std, mean)
}

/// Find the minimum and maximum pixel values of an image.
///
/// # Returns
///
/// A tuple containing the minimum and the maximum, in that order.
pub fn min_max(image: &GrayImage) -> (u8, u8) {
    image
        .as_slice()
        .iter()
        .fold((u8::MAX, u8::MIN), |(min, max), &val| {
            (min.min(val), max.max(val))
        })
}
