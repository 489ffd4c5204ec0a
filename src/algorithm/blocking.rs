//! Rejection of bodies that curl back across their own escape ray

use crate::spatial::{Cell, Direction, OccupancyGrid};

/// Whether any body cell lies on the escape ray cast from the body's head
pub fn is_self_blocking(grid: &OccupancyGrid, body: &[Cell], exit_direction: Direction) -> bool {
    let Some(&head) = body.first() else {
        return false;
    };
    grid.ray(head, exit_direction).any(|cell| body.contains(&cell))
}
