//! Shared grid geometry for the arcade engines.

use serde::{Deserialize, Serialize};

/// Side length of the Snake playfield.
pub const SNAKE_GRID_SIZE: i32 = 20;
/// Side length of the Tron arena.
pub const TRON_GRID_SIZE: i32 = 40;
/// Simulation step period shared by both engines, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Integer cell coordinate on a square grid.
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the adjacent cell one step along `heading`.
    pub fn step(self, heading: Direction) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies inside `[0, size) x [0, size)`.
    pub fn in_bounds(self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Cardinal heading. The y axis grows downward, matching screen rows.
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this heading.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The 180-degree reverse of this heading.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
