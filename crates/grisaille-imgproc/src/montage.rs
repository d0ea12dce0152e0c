use grisaille_image::{GrayImage, ImageError, ImageSize};

/// Arrange a set of images into a single grid image.
///
/// Tiles are placed row-major into a grid `cols` columns wide. Every cell
/// is sized to the largest tile; smaller tiles are anchored at the top-left
/// corner of their cell and the rest of the cell keeps the fill value.
/// Cells are separated by `gap` pixels of the fill value.
///
/// # Arguments
///
/// * `images` - The tiles to arrange, in row-major order.
/// * `cols` - The number of grid columns.
/// * `gap` - The spacing between cells, in pixels.
/// * `fill` - The background value for gaps and unused cells.
///
/// # Errors
///
/// Returns an error if `images` is empty or `cols` is zero.
///
/// # Example
///
/// ```
/// use grisaille_image::{GrayImage, ImageSize};
/// use grisaille_imgproc::montage::montage;
///
/// let size = ImageSize {
///     width: 2,
///     height: 2,
/// };
/// let tiles = vec![
///     GrayImage::from_size_val(size, 10).unwrap(),
///     GrayImage::from_size_val(size, 20).unwrap(),
/// ];
///
/// let composite = montage(&tiles, 2, 1, 0).unwrap();
///
/// assert_eq!(composite.size().width, 5);
/// assert_eq!(composite.size().height, 2);
/// ```
pub fn montage(
    images: &[GrayImage],
    cols: usize,
    gap: usize,
    fill: u8,
) -> Result<GrayImage, ImageError> {
    if images.is_empty() {
        return Err(ImageError::EmptyImageSet);
    }

    if cols == 0 {
        return Err(ImageError::InvalidImageSize(cols, images.len()));
    }

    let cell_w = images.iter().map(|im| im.width()).max().unwrap_or(0);
    let cell_h = images.iter().map(|im| im.height()).max().unwrap_or(0);
    let rows = images.len().div_ceil(cols);

    let canvas_size = ImageSize {
        width: cols * cell_w + (cols - 1) * gap,
        height: rows * cell_h + (rows - 1) * gap,
    };
    let mut canvas = GrayImage::from_size_val(canvas_size, fill)?;

    for (idx, tile) in images.iter().enumerate() {
        let x0 = (idx % cols) * (cell_w + gap);
        let y0 = (idx / cols) * (cell_h + gap);

        let tile_data = tile.as_slice();
        let canvas_data = canvas.as_slice_mut();
        for row in 0..tile.height() {
            let src_offset = row * tile.width();
            let dst_offset = (y0 + row) * canvas_size.width + x0;
            canvas_data[dst_offset..dst_offset + tile.width()]
                .copy_from_slice(&tile_data[src_offset..src_offset + tile.width()]);
        }
    }

    Ok(canvas)
}
