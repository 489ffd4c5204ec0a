//! PNG board preview with transparent background

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::io::configuration::{PREVIEW_CELL_PIXELS, PREVIEW_HEAD_HIGHLIGHT};
use crate::io::error::{AlgorithmError, Result, WithPath};
use crate::spatial::{Cell, SnakePlacement};

// Raises the color channels of head cells so the escape end stands out
const fn highlight(color: [u8; 4]) -> [u8; 4] {
    [
        color[0].saturating_add(PREVIEW_HEAD_HIGHLIGHT),
        color[1].saturating_add(PREVIEW_HEAD_HIGHLIGHT),
        color[2].saturating_add(PREVIEW_HEAD_HIGHLIGHT),
        color[3],
    ]
}

/// Export a board as a PNG with one square block per cell
///
/// Row `y = 0` is drawn at the bottom of the image.
///
/// # Errors
///
/// Returns an error if:
/// - The board has zero width or height
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(
    width: usize,
    height: usize,
    placements: &[SnakePlacement],
    output_path: &Path,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(AlgorithmError::InvalidSourceData {
            reason: "Board has no cells to draw".to_string(),
        });
    }

    let image_width = width as u32 * PREVIEW_CELL_PIXELS;
    let image_height = height as u32 * PREVIEW_CELL_PIXELS;
    let mut img = ImageBuffer::from_pixel(image_width, image_height, Rgba([0, 0, 0, 0]));

    for placement in placements {
        for &cell in &placement.segments {
            let color = if placement.head() == Some(cell) {
                highlight(placement.color)
            } else {
                placement.color
            };
            fill_cell(&mut img, height, cell, Rgba(color));
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn fill_cell(
    img: &mut ImageBuffer<Rgba<u8>, Vec<u8>>,
    board_height: usize,
    cell: Cell,
    color: Rgba<u8>,
) {
    if cell.x < 0 || cell.y < 0 || cell.y as usize >= board_height {
        return;
    }
    let origin_x = cell.x as u32 * PREVIEW_CELL_PIXELS;
    let origin_y = (board_height - 1 - cell.y as usize) as u32 * PREVIEW_CELL_PIXELS;

    for dy in 0..PREVIEW_CELL_PIXELS {
        for dx in 0..PREVIEW_CELL_PIXELS {
            if let Some(pixel) = img.get_pixel_mut_checked(origin_x + dx, origin_y + dy) {
                *pixel = color;
            }
        }
    }
}
