//! Tests for the solvability simulation oracle

#[cfg(test)]
mod tests {
    use snakeboard::algorithm::simulation::{
        SimulationOutcome, SimulationPiece, is_solvable, simulate,
    };
    use snakeboard::spatial::{Cell, Direction, SnakePlacement};

    fn snake(id: usize, cells: &[(i32, i32)], exit_direction: Direction) -> SnakePlacement {
        SnakePlacement {
            id,
            segments: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            exit_direction,
            color: [0, 255, 0, 255],
        }
    }

    // Tests empty and single-snake boards are trivially solvable
    #[test]
    fn test_trivial_boards() {
        assert_eq!(
            simulate(3, 3, &[]),
            SimulationOutcome::Solvable { order: vec![] }
        );
        assert_eq!(
            simulate(3, 3, &[snake(0, &[(1, 1), (1, 0)], Direction::North)]),
            SimulationOutcome::Solvable { order: vec![0] }
        );
    }

    // Tests the perpendicular interlock that no pairwise facing check sees
    #[test]
    fn test_cross_axis_deadlock() {
        let placements = [
            snake(0, &[(0, 0), (0, 1), (1, 1)], Direction::East),
            snake(1, &[(1, 0)], Direction::North),
        ];

        let outcome = simulate(4, 4, &placements);
        assert_eq!(
            outcome,
            SimulationOutcome::Deadlocked {
                order: vec![],
                remaining: vec![0, 1],
            }
        );
        assert!(!is_solvable(4, 4, &placements));
    }

    // Tests head-on snakes on one row deadlock
    #[test]
    fn test_head_on_deadlock() {
        let placements = [
            snake(0, &[(0, 0)], Direction::East),
            snake(1, &[(3, 0)], Direction::West),
        ];
        assert!(!is_solvable(4, 1, &placements));
    }

    // Tests a blocked snake escapes once its blocker has left
    #[test]
    fn test_removal_order_frees_blocked_snake() {
        let placements = [
            snake(0, &[(0, 0)], Direction::East),
            snake(1, &[(2, 0)], Direction::North),
        ];
        let outcome = simulate(4, 4, &placements);
        assert_eq!(outcome, SimulationOutcome::Solvable { order: vec![1, 0] });
        assert_eq!(outcome.order(), &[1, 0]);
    }

    // Tests partial progress is reported before a deadlock
    #[test]
    fn test_partial_progress_then_deadlock() {
        let placements = [
            snake(0, &[(0, 0)], Direction::East),
            snake(1, &[(3, 0)], Direction::West),
            snake(2, &[(1, 2)], Direction::North),
        ];
        assert_eq!(
            simulate(4, 3, &placements),
            SimulationOutcome::Deadlocked {
                order: vec![2],
                remaining: vec![0, 1],
            }
        );
    }

    // Tests a snake's own body on its ray is not an obstacle
    #[test]
    fn test_own_body_is_not_an_obstacle() {
        let placements = [snake(0, &[(0, 0), (1, 0)], Direction::East)];
        assert!(is_solvable(3, 1, &placements));
    }

    // Tests the simulation leaves its input untouched
    #[test]
    fn test_simulation_does_not_mutate_input() {
        let placements = vec![
            snake(0, &[(0, 0), (0, 1), (1, 1)], Direction::East),
            snake(1, &[(1, 0)], Direction::North),
        ];
        let before = placements.clone();
        let _ = simulate(4, 4, &placements);
        assert_eq!(placements, before);

        let copy = SimulationPiece::from(&placements[0]);
        assert_eq!(copy.id, 0);
        assert_eq!(copy.segments, placements[0].segments);
        assert_eq!(copy.exit_direction, Direction::East);
    }
}
