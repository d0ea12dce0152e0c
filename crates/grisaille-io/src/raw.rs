use std::path::Path;

use grisaille_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Reads a headerless raw image from the given file path.
///
/// The file must contain exactly `size.width * size.height` bytes, one
/// byte per pixel, row-major. The dimensions are supplied by the caller
/// since the format carries no header.
///
/// # Arguments
///
/// * `file_path` - The path to the raw file.
/// * `size` - The expected size of the image.
///
/// # Errors
///
/// Returns an error if the file does not exist or if the byte count does
/// not match the requested dimensions.
pub fn read_image_raw(file_path: impl AsRef<Path>, size: ImageSize) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let data = std::fs::read(file_path)?;

    if data.len() != size.width * size.height {
        return Err(IoError::UnexpectedRawLength(
            data.len(),
            size.width * size.height,
        ));
    }

    Ok(GrayImage::new(size, data)?)
}

/// Writes the given image to the given file path as headerless raw data.
///
/// # Arguments
///
/// * `file_path` - The path to the raw file.
/// * `image` - The image to write, dumped byte-for-byte.
pub fn write_image_raw(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    std::fs::write(file_path, image.as_slice())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use grisaille_image::{GrayImage, ImageSize};

    use crate::error::IoError;

    #[test]
    fn read_write_raw() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.raw");

        let image = GrayImage::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 1, 2, 3, 4, 5],
        )?;

        super::write_image_raw(&file_path, &image)?;
        let image_back = super::read_image_raw(&file_path, image.size())?;

        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_raw_missing_file() {
        let res = super::read_image_raw(
            "missing.raw",
            ImageSize {
                width: 2,
                height: 2,
            },
        );
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_raw_size_mismatch() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("short.raw");
        std::fs::write(&file_path, [0u8; 3])?;

        let res = super::read_image_raw(
            &file_path,
            ImageSize {
                width: 2,
                height: 2,
            },
        );
        assert!(matches!(res, Err(IoError::UnexpectedRawLength(3, 4))));

        Ok(())
    }
}
