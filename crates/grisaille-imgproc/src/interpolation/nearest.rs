use grisaille_image::GrayImage;

/// Kernel for nearest neighbor sampling
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to sample.
/// * `v` - The y coordinate of the pixel to sample.
///
/// # Returns
///
/// The source pixel value, copied verbatim.
pub(crate) fn nearest_neighbor_interpolation(image: &GrayImage, u: f64, v: f64) -> u8 {
    let (rows, cols) = (image.rows(), image.cols());

    // truncate the continuous coordinate, never round
    let iu = (u.floor() as usize).min(cols - 1);
    let iv = (v.floor() as usize).min(rows - 1);

    image.as_slice()[iv * cols + iu]
}
