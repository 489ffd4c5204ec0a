//! Cell coordinates and the four axis-aligned escape directions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer grid coordinate, `x` grows east and `y` grows north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Cell {
    /// Create a cell from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let [dx, dy] = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance between two cells
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether two cells share an edge
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four axis-aligned unit vectors a snake can escape along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `(0, 1)`
    North,
    /// `(0, -1)`
    South,
    /// `(1, 0)`
    East,
    /// `(-1, 0)`
    West,
}

impl Direction {
    /// All directions in their canonical order, the order shuffles start from
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Unit vector as `[dx, dy]`
    pub const fn vector(self) -> [i32; 2] {
        match self {
            Self::North => [0, 1],
            Self::South => [0, -1],
            Self::East => [1, 0],
            Self::West => [-1, 0],
        }
    }

    /// The direction pointing the other way along the same axis
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// The two directions at right angles to this one
    pub const fn perpendicular(self) -> [Self; 2] {
        match self {
            Self::North | Self::South => [Self::East, Self::West],
            Self::East | Self::West => [Self::North, Self::South],
        }
    }

    /// Direction of the single step from `from` to `to`, if they are adjacent
    pub fn between(from: Cell, to: Cell) -> Option<Self> {
        Self::ALL.into_iter().find(|&direction| from.step(direction) == to)
    }

    /// Arrow glyph used by text previews
    pub const fn arrow(self) -> char {
        match self {
            Self::North => '^',
            Self::South => 'v',
            Self::East => '>',
            Self::West => '<',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
