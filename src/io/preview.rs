//! Plain-text board preview for terminals and editor logs

use crate::spatial::{Cell, OccupancyGrid, SnakePlacement};

const EMPTY_GLYPH: char = '.';
const BODY_GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Render a board with the top row (highest `y`) first
///
/// Heads show their escape arrow, body cells a letter cycling with the snake
/// id, and empty cells a dot.
pub fn render_text(width: usize, height: usize, placements: &[SnakePlacement]) -> String {
    let mut grid = OccupancyGrid::new(width, height);
    for placement in placements {
        for &cell in &placement.segments {
            grid.set_occupant(cell, Some(placement.id));
        }
    }

    let mut output = String::with_capacity((width + 1) * height);
    for y in (0..height).rev() {
        for x in 0..width {
            let cell = Cell::new(x as i32, y as i32);
            output.push(glyph_at(&grid, placements, cell));
        }
        output.push('\n');
    }
    output
}

fn glyph_at(grid: &OccupancyGrid, placements: &[SnakePlacement], cell: Cell) -> char {
    let Some(owner) = grid.occupant(cell) else {
        return EMPTY_GLYPH;
    };
    if let Some(placement) = placements.iter().find(|placement| placement.id == owner)
        && placement.head() == Some(cell)
    {
        return placement.exit_direction.arrow();
    }
    BODY_GLYPHS
        .get(owner % BODY_GLYPHS.len())
        .map_or('#', |&glyph| char::from(glyph))
}
