//! Cheap rejection of head-on standoffs between opposite-facing snakes

use std::collections::HashSet;

use crate::spatial::{Cell, Direction, OccupancyGrid, SnakePlacement};

/// Whether a snake with this head and direction would face an existing snake head-on
///
/// Walks the escape ray from `head` and inspects each snake met along it
/// once. A conflict is reported when that snake escapes the opposite way and
/// its own head lies ahead on the same line, since neither could ever pass
/// the other. Perpendicular interlocks are left to the simulator.
pub fn has_facing_conflict(
    grid: &OccupancyGrid,
    placements: &[SnakePlacement],
    head: Cell,
    exit_direction: Direction,
) -> bool {
    let opposite = exit_direction.opposite();
    let mut inspected = HashSet::new();

    for cell in grid.ray(head, exit_direction) {
        let Some(owner) = grid.occupant(cell) else {
            continue;
        };
        if !inspected.insert(owner) {
            continue;
        }
        let Some(other) = placements.get(owner) else {
            continue;
        };
        if other.exit_direction != opposite {
            continue;
        }
        if other
            .head()
            .is_some_and(|other_head| lies_ahead(head, other_head, exit_direction))
        {
            return true;
        }
    }

    false
}

/// Whether `target` sits on the ray from `origin` along `direction`
fn lies_ahead(origin: Cell, target: Cell, direction: Direction) -> bool {
    let [dx, dy] = direction.vector();
    let offset_x = target.x - origin.x;
    let offset_y = target.y - origin.y;
    let along = offset_x * dx + offset_y * dy;
    let across = offset_x * dy - offset_y * dx;
    along > 0 && across == 0
}
