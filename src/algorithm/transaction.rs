//! Board state and the commit/rollback protocol guarding it
//!
//! A candidate is written into the grid and the accepted list, then the whole
//! accepted set is simulated. If the board is no longer solvable the write is
//! undone, leaving grid and list exactly as they were before the call.

use crate::algorithm::simulation::{SimulationOutcome, simulate};
use crate::spatial::{OccupancyGrid, PieceId, SnakePlacement};

/// Result of offering a candidate to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The candidate is now part of the board under this id
    Committed(PieceId),
    /// The candidate was rejected and left no trace
    RolledBack,
}

impl CommitOutcome {
    /// Whether the candidate was kept
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// Occupancy grid plus the accepted snakes, kept in sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// Cell ownership, the source of truth for occupancy
    pub grid: OccupancyGrid,
    placements: Vec<SnakePlacement>,
}

impl BoardState {
    /// Create an empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: OccupancyGrid::new(width, height),
            placements: Vec::new(),
        }
    }

    /// Board width in cells
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Board height in cells
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Accepted snakes in acceptance order
    pub fn placements(&self) -> &[SnakePlacement] {
        &self.placements
    }

    /// Number of accepted snakes
    pub const fn accepted_count(&self) -> usize {
        self.placements.len()
    }

    /// Clear the board for a fresh generation run
    pub fn reset(&mut self) {
        self.grid.clear();
        self.placements.clear();
    }

    /// Simulate clearing the current accepted set
    pub fn simulate(&self) -> SimulationOutcome {
        simulate(self.width(), self.height(), &self.placements)
    }

    /// Add a snake without simulating, for exercising the verification path
    #[cfg(test)]
    pub(crate) fn push_unverified(&mut self, mut placement: SnakePlacement) {
        let id = self.placements.len();
        placement.id = id;
        for &cell in &placement.segments {
            self.grid.set_occupant(cell, Some(id));
        }
        self.placements.push(placement);
    }

    /// Tentatively add `candidate`, keeping it only if the board stays solvable
    ///
    /// The candidate's id is overwritten with its acceptance index. Malformed
    /// bodies and bodies that overlap owned cells or leave the grid are
    /// rejected before any write.
    pub fn try_commit(&mut self, mut candidate: SnakePlacement) -> CommitOutcome {
        if !candidate.is_well_formed()
            || !candidate
                .segments
                .iter()
                .all(|&cell| self.grid.is_empty(cell))
        {
            return CommitOutcome::RolledBack;
        }

        let id = self.placements.len();
        candidate.id = id;
        for &cell in &candidate.segments {
            self.grid.set_occupant(cell, Some(id));
        }
        self.placements.push(candidate);

        if self.simulate().is_solvable() {
            log::debug!("committed snake {id}");
            return CommitOutcome::Committed(id);
        }

        if let Some(rejected) = self.placements.pop() {
            for &cell in &rejected.segments {
                self.grid.set_occupant(cell, None);
            }
        }
        log::debug!("rolled back candidate {id}: board would deadlock");
        CommitOutcome::RolledBack
    }
}
