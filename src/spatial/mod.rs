//! Spatial data structures for the puzzle board
//!
//! This module contains:
//! - Cell coordinates and escape directions
//! - The dense occupancy grid and escape ray iteration
//! - Snake placement records

/// Cell coordinates and axis-aligned directions
pub mod direction;
/// Occupancy grid and escape rays
pub mod grid;
/// Snake placement records
pub mod piece;

pub use direction::{Cell, Direction};
pub use grid::{OccupancyGrid, PieceId};
pub use piece::{Rgba, SnakePlacement};
