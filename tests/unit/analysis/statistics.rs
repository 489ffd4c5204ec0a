//! Tests for board statistics

#[cfg(test)]
mod tests {
    use snakeboard::analysis::statistics::BoardStatistics;
    use snakeboard::spatial::{Cell, Direction, SnakePlacement};

    fn snake(id: usize, cells: &[(i32, i32)], exit_direction: Direction) -> SnakePlacement {
        SnakePlacement {
            id,
            segments: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            exit_direction,
            color: [10, 20, 30, 255],
        }
    }

    // Tests counts, lengths, turns and density over a small board
    #[test]
    fn test_statistics_from_board() {
        let placements = [
            snake(0, &[(0, 0), (1, 0), (1, 1)], Direction::West),
            snake(1, &[(3, 3), (3, 2)], Direction::North),
            snake(2, &[(0, 3)], Direction::North),
        ];
        let statistics = BoardStatistics::from_board(4, 4, &placements);

        assert_eq!(statistics.piece_count, 3);
        assert_eq!(statistics.occupied_cells, 6);
        assert_eq!(statistics.total_cells, 16);
        assert_eq!(statistics.min_length, 1);
        assert_eq!(statistics.max_length, 3);
        assert_eq!(statistics.length_histogram.get(&2), Some(&1));
        assert_eq!(statistics.total_turns, 1);
        assert_eq!(statistics.count_for(Direction::North), 2);
        assert_eq!(statistics.count_for(Direction::West), 1);
        assert_eq!(statistics.count_for(Direction::South), 0);
        assert!((statistics.density() - 0.375).abs() < f64::EPSILON);
        assert!((statistics.mean_length() - 2.0).abs() < f64::EPSILON);
    }

    // Tests an empty board reports zeros rather than dividing by zero
    #[test]
    fn test_empty_board_statistics() {
        let statistics = BoardStatistics::from_board(3, 3, &[]);
        assert_eq!(statistics.piece_count, 0);
        assert_eq!(statistics.min_length, 0);
        assert!(statistics.mean_length().abs() < f64::EPSILON);
        assert!(statistics.density().abs() < f64::EPSILON);
    }

    // Tests the summary text names the headline numbers
    #[test]
    fn test_display_summary() {
        let placements = [snake(0, &[(0, 0), (0, 1)], Direction::East)];
        let text = BoardStatistics::from_board(2, 2, &placements).to_string();
        assert!(text.contains("snakes: 1"));
        assert!(text.contains("density: 50.0%"));
        assert!(text.contains("east 1"));
    }
}
