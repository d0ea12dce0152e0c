/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the image dimensions are not strictly positive.
    #[error("Invalid image size ({0}x{1})")]
    InvalidImageSize(usize, usize),

    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the number of histogram bins is out of range.
    #[error("Invalid number of histogram bins ({0})")]
    InvalidHistogramBins(usize),

    /// Error when a crop region falls outside the source image.
    #[error("Crop region {2}x{3} at ({0}, {1}) exceeds the image bounds")]
    CropOutOfBounds(usize, usize, usize, usize),

    /// Error when a montage is requested from an empty image set.
    #[error("Cannot build a montage from an empty image set")]
    EmptyImageSet,
}
