//! Dense occupancy grid mapping each cell to the snake that owns it
//!
//! The grid is the single source of truth for occupancy during generation.
//! Storage is a row-major `ndarray` matrix indexed `[y, x]` where 0 marks an
//! empty cell and `id + 1` marks a cell owned by snake `id`.

use ndarray::Array2;
use rand::Rng;

use crate::spatial::direction::{Cell, Direction};

/// Identifier of a committed snake, assigned in acceptance order
pub type PieceId = usize;

/// Width × height occupancy matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    /// Occupancy values (0 = empty, 1+ = piece id + 1)
    cells: Array2<u32>,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::zeros((height, width)),
            width,
            height,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether the cell lies inside the grid
    pub const fn is_within_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    /// Whether the cell lies exactly one step outside the grid on some side
    pub const fn is_exit_cell(&self, cell: Cell) -> bool {
        if self.is_within_bounds(cell) {
            return false;
        }
        let width = self.width as i32;
        let height = self.height as i32;
        cell.x >= -1 && cell.x <= width && cell.y >= -1 && cell.y <= height
    }

    const fn index(&self, cell: Cell) -> Option<[usize; 2]> {
        if self.is_within_bounds(cell) {
            Some([cell.y as usize, cell.x as usize])
        } else {
            None
        }
    }

    /// Snake owning the cell, `None` for empty or out-of-bounds cells
    pub fn occupant(&self, cell: Cell) -> Option<PieceId> {
        let index = self.index(cell)?;
        match self.cells.get(index).copied().unwrap_or(0) {
            0 => None,
            value => Some(value as usize - 1),
        }
    }

    /// Whether the cell is inside the grid and unowned
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.is_within_bounds(cell) && self.occupant(cell).is_none()
    }

    /// Assign or clear the owner of a cell; out-of-bounds writes are ignored
    pub fn set_occupant(&mut self, cell: Cell, occupant: Option<PieceId>) {
        let Some(index) = self.index(cell) else {
            return;
        };
        if let Some(value) = self.cells.get_mut(index) {
            *value = occupant.map_or(0, |id| id as u32 + 1);
        }
    }

    /// Sample uniformly among empty cells, `None` when the grid is full
    ///
    /// Candidates are enumerated row by row from `y = 0`, so the draw is
    /// reproducible for a given random source state.
    pub fn random_empty_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        empty.get(rng.random_range(0..empty.len())).copied()
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|((y, x), _)| Cell::new(x as i32, y as i32))
            .collect()
    }

    /// All owned cells with their owner, in row-major order
    pub fn occupied_cells(&self) -> Vec<(Cell, PieceId)> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value > 0)
            .map(|((y, x), &value)| (Cell::new(x as i32, y as i32), value as usize - 1))
            .collect()
    }

    /// Number of owned cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value > 0).count()
    }

    /// Fraction of cells that are owned
    pub fn density(&self) -> f64 {
        if self.cell_count() == 0 {
            return 0.0;
        }
        self.occupied_count() as f64 / self.cell_count() as f64
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// In-bounds cells strictly outward from `origin` along `direction`
    pub const fn ray(&self, origin: Cell, direction: Direction) -> EscapeRay<'_> {
        EscapeRay {
            grid: self,
            current: origin,
            direction,
        }
    }
}

/// Iterator over the in-bounds cells of an escape ray
///
/// Stops before the first exit cell, so a ray cast from a boundary cell
/// toward the boundary is empty.
#[derive(Debug, Clone)]
pub struct EscapeRay<'a> {
    grid: &'a OccupancyGrid,
    current: Cell,
    direction: Direction,
}

impl Iterator for EscapeRay<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current.step(self.direction);
        if !self.grid.is_within_bounds(next) {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
