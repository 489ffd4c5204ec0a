//! Solvability oracle: greedy removal simulation over a private board copy
//!
//! Removing a snake only ever frees cells, so a snake that can escape now can
//! still escape after any further removals. Repeatedly taking the first
//! escapable snake therefore clears the board whenever any removal order
//! would, and a scan that finds nothing escapable proves a deadlock.

use bitvec::prelude::*;

use crate::io::configuration::SIMULATION_ITERATION_FACTOR;
use crate::spatial::{Cell, Direction, OccupancyGrid, PieceId, SnakePlacement};

/// Throwaway copy of the fields the simulation needs from a placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationPiece {
    /// Identifier of the placement this was copied from
    pub id: PieceId,
    /// Body cells, head first
    pub segments: Vec<Cell>,
    /// Escape direction
    pub exit_direction: Direction,
}

impl From<&SnakePlacement> for SimulationPiece {
    fn from(placement: &SnakePlacement) -> Self {
        Self {
            id: placement.id,
            segments: placement.segments.clone(),
            exit_direction: placement.exit_direction,
        }
    }
}

/// Result of simulating a full clearance attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// Every snake escaped, in this order
    Solvable {
        /// Placement ids in removal order
        order: Vec<PieceId>,
    },
    /// Some snakes can never move
    Deadlocked {
        /// Placement ids removed before the deadlock was reached
        order: Vec<PieceId>,
        /// Placement ids still on the board, in insertion order
        remaining: Vec<PieceId>,
    },
}

impl SimulationOutcome {
    /// Whether the board can be fully cleared
    pub const fn is_solvable(&self) -> bool {
        matches!(self, Self::Solvable { .. })
    }

    /// Placement ids in the order they were removed
    pub fn order(&self) -> &[PieceId] {
        match self {
            Self::Solvable { order } | Self::Deadlocked { order, .. } => order,
        }
    }
}

/// Private simulation board; the grid owner value is the index into `pieces`
struct SimulationState {
    grid: OccupancyGrid,
    pieces: Vec<SimulationPiece>,
    exited: BitVec,
}

impl SimulationState {
    fn new(width: usize, height: usize, placements: &[SnakePlacement]) -> Self {
        let pieces: Vec<SimulationPiece> = placements.iter().map(SimulationPiece::from).collect();
        let mut grid = OccupancyGrid::new(width, height);
        for (index, piece) in pieces.iter().enumerate() {
            for &cell in &piece.segments {
                grid.set_occupant(cell, Some(index));
            }
        }
        let exited = bitvec![0; pieces.len()];
        Self {
            grid,
            pieces,
            exited,
        }
    }

    fn has_exited(&self, index: usize) -> bool {
        self.exited.get(index).is_some_and(|bit| *bit)
    }

    fn can_escape(&self, index: usize, piece: &SimulationPiece) -> bool {
        let Some(&head) = piece.segments.first() else {
            return true;
        };
        self.grid
            .ray(head, piece.exit_direction)
            .all(|cell| self.grid.occupant(cell).is_none_or(|owner| owner == index))
    }

    /// First present snake, in insertion order, with a clear escape ray
    fn first_escapable(&self) -> Option<usize> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|&(index, _)| !self.has_exited(index))
            .find(|&(index, piece)| self.can_escape(index, piece))
            .map(|(index, _)| index)
    }

    fn remove(&mut self, index: usize) {
        if let Some(piece) = self.pieces.get(index) {
            for &cell in &piece.segments {
                self.grid.set_occupant(cell, None);
            }
        }
        self.exited.set(index, true);
    }

    fn remaining(&self) -> Vec<PieceId> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|&(index, _)| !self.has_exited(index))
            .map(|(_, piece)| piece.id)
            .collect()
    }
}

/// Simulate clearing `placements` from a `width × height` board
///
/// The placements themselves are never modified; all work happens on
/// snapshots built for this call.
pub fn simulate(width: usize, height: usize, placements: &[SnakePlacement]) -> SimulationOutcome {
    let mut state = SimulationState::new(width, height, placements);
    let total = state.pieces.len();
    let iteration_cap = total * SIMULATION_ITERATION_FACTOR;
    let mut order = Vec::with_capacity(total);

    for _ in 0..iteration_cap {
        if order.len() == total {
            break;
        }
        let Some(index) = state.first_escapable() else {
            break;
        };
        if let Some(piece) = state.pieces.get(index) {
            order.push(piece.id);
        }
        state.remove(index);
    }

    if order.len() == total {
        SimulationOutcome::Solvable { order }
    } else {
        let remaining = state.remaining();
        SimulationOutcome::Deadlocked { order, remaining }
    }
}

/// Whether `placements` can be fully cleared
pub fn is_solvable(width: usize, height: usize, placements: &[SnakePlacement]) -> bool {
    simulate(width, height, placements).is_solvable()
}
