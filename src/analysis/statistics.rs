//! Summary statistics of a generated board for previews and tuning

use std::collections::BTreeMap;
use std::fmt;

use crate::spatial::{Direction, SnakePlacement};

/// Aggregate measurements of one board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStatistics {
    /// Number of snakes
    pub piece_count: usize,
    /// Cells owned by any snake
    pub occupied_cells: usize,
    /// Total cells on the board
    pub total_cells: usize,
    /// Shortest body, 0 for an empty board
    pub min_length: usize,
    /// Longest body, 0 for an empty board
    pub max_length: usize,
    /// Snake count per body length
    pub length_histogram: BTreeMap<usize, usize>,
    /// Snake count per escape direction, in `Direction::ALL` order
    pub direction_counts: [usize; 4],
    /// Direction changes summed over all bodies
    pub total_turns: usize,
}

impl BoardStatistics {
    /// Measure a board of the given size
    pub fn from_board(width: usize, height: usize, placements: &[SnakePlacement]) -> Self {
        let mut length_histogram = BTreeMap::new();
        let mut direction_counts = [0; 4];
        let mut occupied_cells = 0;
        let mut total_turns = 0;

        for placement in placements {
            let length = placement.len();
            occupied_cells += length;
            *length_histogram.entry(length).or_insert(0) += 1;
            total_turns += placement.turn_count();

            let slot = Direction::ALL
                .iter()
                .position(|&direction| direction == placement.exit_direction);
            if let Some(count) = slot.and_then(|index| direction_counts.get_mut(index)) {
                *count += 1;
            }
        }

        Self {
            piece_count: placements.len(),
            occupied_cells,
            total_cells: width * height,
            min_length: length_histogram.keys().next().copied().unwrap_or(0),
            max_length: length_histogram.keys().next_back().copied().unwrap_or(0),
            length_histogram,
            direction_counts,
            total_turns,
        }
    }

    /// Occupied cells divided by total cells
    pub const fn density(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        self.occupied_cells as f64 / self.total_cells as f64
    }

    /// Average body length, 0 for an empty board
    pub const fn mean_length(&self) -> f64 {
        if self.piece_count == 0 {
            return 0.0;
        }
        self.occupied_cells as f64 / self.piece_count as f64
    }

    /// Snakes escaping along `direction`
    pub fn count_for(&self, direction: Direction) -> usize {
        Direction::ALL
            .iter()
            .position(|&candidate| candidate == direction)
            .and_then(|index| self.direction_counts.get(index))
            .copied()
            .unwrap_or(0)
    }
}

impl fmt::Display for BoardStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "snakes: {}  cells: {}/{}  density: {:.1}%",
            self.piece_count,
            self.occupied_cells,
            self.total_cells,
            self.density() * 100.0
        )?;
        writeln!(
            f,
            "length: min {} max {} mean {:.2}  turns: {}",
            self.min_length,
            self.max_length,
            self.mean_length(),
            self.total_turns
        )?;
        let directions: Vec<String> = Direction::ALL
            .iter()
            .map(|&direction| format!("{direction} {}", self.count_for(direction)))
            .collect();
        write!(f, "directions: {}", directions.join(", "))
    }
}
