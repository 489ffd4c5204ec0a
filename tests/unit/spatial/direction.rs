//! Tests for cell arithmetic and direction relationships

#[cfg(test)]
mod tests {
    use snakeboard::spatial::{Cell, Direction};

    // Tests every direction pairs with its reverse along the same axis
    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
            let [dx, dy] = direction.vector();
            assert_eq!(direction.opposite().vector(), [-dx, -dy]);
        }
    }

    // Tests perpendicular directions lie on the other axis
    #[test]
    fn test_perpendicular_directions() {
        assert_eq!(
            Direction::North.perpendicular(),
            [Direction::East, Direction::West]
        );
        assert_eq!(
            Direction::West.perpendicular(),
            [Direction::North, Direction::South]
        );
        for direction in Direction::ALL {
            for perpendicular in direction.perpendicular() {
                let [ax, ay] = direction.vector();
                let [bx, by] = perpendicular.vector();
                assert_eq!(ax * bx + ay * by, 0);
            }
        }
    }

    // Tests unit vectors match the board orientation (north is +y)
    #[test]
    fn test_step_follows_unit_vectors() {
        let origin = Cell::new(2, 2);
        assert_eq!(origin.step(Direction::North), Cell::new(2, 3));
        assert_eq!(origin.step(Direction::South), Cell::new(2, 1));
        assert_eq!(origin.step(Direction::East), Cell::new(3, 2));
        assert_eq!(origin.step(Direction::West), Cell::new(1, 2));
    }

    // Tests recovering the direction of a single step
    #[test]
    fn test_between_adjacent_cells() {
        let origin = Cell::new(0, 0);
        for direction in Direction::ALL {
            assert_eq!(
                Direction::between(origin, origin.step(direction)),
                Some(direction)
            );
        }
        assert_eq!(Direction::between(origin, Cell::new(1, 1)), None);
        assert_eq!(Direction::between(origin, origin), None);
    }

    // Tests adjacency is Manhattan distance one, never diagonal
    #[test]
    fn test_adjacency() {
        let cell = Cell::new(3, 3);
        assert!(cell.is_adjacent(Cell::new(3, 4)));
        assert!(cell.is_adjacent(Cell::new(2, 3)));
        assert!(!cell.is_adjacent(Cell::new(4, 4)));
        assert!(!cell.is_adjacent(cell));
        assert_eq!(cell.manhattan_distance(Cell::new(0, 0)), 6);
    }

    // Tests directions serialize as lowercase names
    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&Direction::East).unwrap_or_default();
        assert_eq!(json, "\"east\"");
        assert_eq!(Direction::South.to_string(), "south");
        assert_eq!(Direction::North.arrow(), '^');
    }
}
