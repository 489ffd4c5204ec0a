//! Level asset format consumed by the game: board size plus colored snakes
//!
//! Assets are pretty-printed JSON. Snake ids are not stored; they are
//! reassigned from list order on load.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::algorithm::executor::GeneratedBoard;
use crate::algorithm::simulation::{SimulationOutcome, simulate};
use crate::io::configuration::MAX_GRID_CELLS;
use crate::io::error::{AlgorithmError, Result, WithPath, invalid_source_data};
use crate::spatial::{Cell, Direction, OccupancyGrid, Rgba, SnakePlacement};

/// One snake as persisted in a level file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelPiece {
    /// Display color
    pub color: Rgba,
    /// Body cells, head first
    pub segments: Vec<Cell>,
    /// Escape direction
    pub exit_direction: Direction,
}

/// A complete persisted level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelAsset {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Snakes in acceptance order
    pub pieces: Vec<LevelPiece>,
}

impl LevelAsset {
    /// Capture a set of placements
    pub fn from_placements(width: usize, height: usize, placements: &[SnakePlacement]) -> Self {
        let pieces = placements
            .iter()
            .map(|placement| LevelPiece {
                color: placement.color,
                segments: placement.segments.clone(),
                exit_direction: placement.exit_direction,
            })
            .collect();
        Self {
            width,
            height,
            pieces,
        }
    }

    /// Capture a generated board
    pub fn from_board(board: &GeneratedBoard) -> Self {
        Self::from_placements(board.width, board.height, &board.placements)
    }

    /// Rebuild placements, assigning ids from list order
    pub fn to_placements(&self) -> Vec<SnakePlacement> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(id, piece)| SnakePlacement {
                id,
                segments: piece.segments.clone(),
                exit_direction: piece.exit_direction,
                color: piece.color,
            })
            .collect()
    }

    /// Check the level describes a playable board
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` for zero or oversized dimensions, malformed bodies,
    /// out-of-bounds cells or overlapping snakes, and `UnsolvableBoard` when
    /// the snakes cannot all be cleared
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid_source_data(&format!(
                "board size {}x{} has no cells",
                self.width, self.height
            )));
        }
        let cells = self.width.checked_mul(self.height).unwrap_or(usize::MAX);
        if cells > MAX_GRID_CELLS {
            return Err(invalid_source_data(&format!(
                "board size {}x{} exceeds {MAX_GRID_CELLS} cells",
                self.width, self.height
            )));
        }

        let grid = OccupancyGrid::new(self.width, self.height);
        let mut claimed = HashSet::new();
        for (index, piece) in self.pieces.iter().enumerate() {
            if !crate::spatial::piece::is_simple_chain(&piece.segments) {
                return Err(invalid_source_data(&format!(
                    "snake {index} is not a connected, self-avoiding chain"
                )));
            }
            for &cell in &piece.segments {
                if !grid.is_within_bounds(cell) {
                    return Err(invalid_source_data(&format!(
                        "snake {index} leaves the board at {cell}"
                    )));
                }
                if !claimed.insert(cell) {
                    return Err(invalid_source_data(&format!(
                        "snake {index} overlaps another snake at {cell}"
                    )));
                }
            }
        }

        match simulate(self.width, self.height, &self.to_placements()) {
            SimulationOutcome::Solvable { .. } => Ok(()),
            SimulationOutcome::Deadlocked { remaining, .. } => {
                Err(AlgorithmError::UnsolvableBoard {
                    pieces: self.pieces.len(),
                    remaining,
                })
            }
        }
    }
}

/// Write a level asset as pretty JSON, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written or the
/// asset cannot be encoded
pub fn save_level(asset: &LevelAsset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    let json =
        serde_json::to_string_pretty(asset).map_err(|source| AlgorithmError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;
    std::fs::write(path, json).with_path(path, "write level")
}

/// Read and validate a level asset
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the level fails
/// validation
pub fn load_level(path: &Path) -> Result<LevelAsset> {
    let json = std::fs::read_to_string(path).with_path(path, "read level")?;
    let asset: LevelAsset =
        serde_json::from_str(&json).map_err(|source| AlgorithmError::Serialization {
            path: path.to_path_buf(),
            source,
        })?;
    asset.validate()?;
    Ok(asset)
}
