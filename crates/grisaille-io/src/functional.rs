use std::path::Path;

use grisaille_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path and converts it to grayscale.
///
/// The method reads any image format supported by the codec. Images with
/// multiple channels are converted to a single luminance channel using the
/// codec's standard grayscale conversion.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be decoded.
pub fn read_image_gray8(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::open(file_path)?;
    let gray = img.to_luma8();

    let size = ImageSize {
        width: gray.width() as usize,
        height: gray.height() as usize,
    };

    Ok(GrayImage::new(size, gray.into_raw())?)
}

/// Writes the given grayscale image to the given file path.
///
/// The output format is chosen from the file extension by the codec
/// (e.g. `png`, `bmp`, `jpg`).
///
/// # Arguments
///
/// * `file_path` - The path to write the image to.
/// * `image` - The image to encode.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    image::save_buffer(
        file_path.as_ref(),
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::L8,
    )?;

    Ok(())
}
