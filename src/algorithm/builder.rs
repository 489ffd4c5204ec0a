//! Random-walk growth of a candidate snake body from its head
//!
//! The body extends backward from the head, away from the escape direction,
//! so a straight snake never sits on its own escape ray. With probability
//! `curve_chance` each step also considers turning left or right; when the
//! straight continuation is blocked turning is always considered.

use crate::algorithm::selection::RandomSelector;
use crate::spatial::{Cell, Direction, OccupancyGrid};

/// Parameters for growing one candidate body
#[derive(Debug, Clone, Copy)]
pub struct BodyRequest {
    /// First cell of the body
    pub head: Cell,
    /// Number of cells the walk tries to place
    pub target_length: usize,
    /// Shortest body accepted when the walk gets stuck early
    pub min_length: usize,
    /// Probability of considering a turn while going straight is possible
    pub curve_chance: f64,
    /// Escape direction the finished snake will use
    pub exit_direction: Direction,
}

/// Grow a body head-first, returning `None` if it stays shorter than `min_length`
///
/// Cells are valid moves when they are inside the grid, unowned, and not
/// already part of this body. The walk stops at `target_length` cells or
/// when no valid move remains.
pub fn grow_body(
    grid: &OccupancyGrid,
    request: &BodyRequest,
    selector: &mut RandomSelector,
) -> Option<Vec<Cell>> {
    let mut body = Vec::with_capacity(request.target_length.max(1));
    body.push(request.head);

    let mut grow_direction = request.exit_direction.opposite();
    let mut moves = Vec::with_capacity(3);

    for _ in 1..request.target_length {
        let tail = body.last().copied().unwrap_or(request.head);
        let is_open = |direction: Direction| {
            let next = tail.step(direction);
            grid.is_empty(next) && !body.contains(&next)
        };

        moves.clear();
        let straight_open = is_open(grow_direction);
        if straight_open {
            moves.push(grow_direction);
        }

        if !straight_open || selector.chance(request.curve_chance) {
            moves.extend(
                grow_direction
                    .perpendicular()
                    .into_iter()
                    .filter(|&direction| is_open(direction)),
            );
        }

        let Some(choice) = selector.index(moves.len()) else {
            break;
        };
        let Some(&direction) = moves.get(choice) else {
            break;
        };

        body.push(tail.step(direction));
        grow_direction = direction;
    }

    (body.len() >= request.min_length).then_some(body)
}
