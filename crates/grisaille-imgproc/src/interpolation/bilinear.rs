use grisaille_image::GrayImage;

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value, still in floating point.
pub(crate) fn bilinear_interpolation(image: &GrayImage, u: f64, v: f64) -> f64 {
    let (rows, cols) = (image.rows(), image.cols());

    let iu0 = (u.floor() as usize).min(cols - 1);
    let iv0 = (v.floor() as usize).min(rows - 1);

    let iu1 = (iu0 + 1).min(cols - 1);
    let iv1 = (iv0 + 1).min(rows - 1);

    let frac_u = u - iu0 as f64;
    let frac_v = v - iv0 as f64;

    let data = image.as_slice();
    let p00 = data[iv0 * cols + iu0] as f64;
    let p01 = data[iv0 * cols + iu1] as f64;
    let p10 = data[iv1 * cols + iu0] as f64;
    let p11 = data[iv1 * cols + iu1] as f64;

    // Nested lerps: invariant is that a constant neighborhood reproduces
    // the constant exactly, even after truncation to u8.
    let top = p00 + (p01 - p00) * frac_u;
    let bottom = p10 + (p11 - p10) * frac_u;

    top + (bottom - top) * frac_v
}
