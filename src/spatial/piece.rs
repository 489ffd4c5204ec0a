//! Snake placements: ordered bodies with a fixed escape direction

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::spatial::direction::{Cell, Direction};
use crate::spatial::grid::PieceId;

/// RGBA color as stored in palettes and level assets
pub type Rgba = [u8; 4];

/// A committed (or candidate) snake on the board
///
/// `segments[0]` is the head, the cell its escape ray is cast from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakePlacement {
    /// Acceptance-order identifier, stable for the lifetime of the board
    pub id: PieceId,
    /// Body cells, head first
    pub segments: Vec<Cell>,
    /// Direction the snake slides out along
    pub exit_direction: Direction,
    /// Display color
    pub color: Rgba,
}

impl SnakePlacement {
    /// Head cell, `None` only for a malformed empty body
    pub fn head(&self) -> Option<Cell> {
        self.segments.first().copied()
    }

    /// Number of body cells
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the body has no cells
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the body contains `cell`
    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Consecutive cells are 4-adjacent and no cell repeats
    pub fn is_well_formed(&self) -> bool {
        is_simple_chain(&self.segments)
    }

    /// Number of direction changes along the body
    pub fn turn_count(&self) -> usize {
        let steps: Vec<Option<Direction>> = self
            .segments
            .windows(2)
            .map(|pair| match pair {
                [from, to] => Direction::between(*from, *to),
                _ => None,
            })
            .collect();
        steps.windows(2).filter(|pair| pair.first() != pair.last()).count()
    }
}

/// Whether `cells` form a non-empty, self-avoiding, 4-connected chain
pub fn is_simple_chain(cells: &[Cell]) -> bool {
    if cells.is_empty() {
        return false;
    }
    let connected = cells.windows(2).all(|pair| match pair {
        [a, b] => a.is_adjacent(*b),
        _ => false,
    });
    let unique: HashSet<&Cell> = cells.iter().collect();
    connected && unique.len() == cells.len()
}
