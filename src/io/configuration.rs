//! Algorithm constants and runtime configuration defaults

use crate::spatial::Rgba;

// Generation budget
/// Attempts allowed per requested snake before generation gives up
pub const ATTEMPTS_PER_PIECE: usize = 200;

/// Simulation scans allowed per snake before the oracle stops
pub const SIMULATION_ITERATION_FACTOR: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed number of grid cells
pub const MAX_GRID_CELLS: usize = 1_000_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 8;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 10;

/// Default number of snakes requested
pub const DEFAULT_TARGET_COUNT: usize = 20;

/// Default shortest snake body
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Default longest snake body
pub const DEFAULT_MAX_LENGTH: usize = 6;

/// Default probability of considering a turn at each body step
pub const DEFAULT_CURVE_CHANCE: f64 = 0.3;

/// Colors cycled through in acceptance order
pub const DEFAULT_PALETTE: [Rgba; 8] = [
    [231, 76, 60, 255],
    [52, 152, 219, 255],
    [46, 204, 113, 255],
    [241, 196, 15, 255],
    [155, 89, 182, 255],
    [230, 126, 34, 255],
    [26, 188, 156, 255],
    [236, 112, 160, 255],
];

// Output settings
/// Extension of level asset files
pub const LEVEL_EXTENSION: &str = "json";
/// Prefix of generated level file names
pub const LEVEL_PREFIX: &str = "level";
/// Side length of one cell in PNG previews, in pixels
pub const PREVIEW_CELL_PIXELS: u32 = 16;
/// Brightness added to head cells in PNG previews
pub const PREVIEW_HEAD_HIGHLIGHT: u8 = 60;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
