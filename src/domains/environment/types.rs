use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Grid cell coordinate, row-major. Components are signed so that the
/// neighbors of an edge cell are representable before bounds filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four axis-aligned neighbors, in down, up, right, left order.
    /// The order is load-bearing: it is the tie-breaker when two
    /// candidates are equally close to the goal.
    pub fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.row + 1, self.col),
            Position::new(self.row - 1, self.col),
            Position::new(self.row, self.col + 1),
            Position::new(self.row, self.col - 1),
        ]
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub width: usize,
    pub height: usize,
}

impl GridBounds {
    pub fn contains(&self, position: &Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.height
            && (position.col as usize) < self.width
    }
}

/// Read-only snapshot handed to the navigator each step. The whole board
/// is observable; there is no visibility radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perception {
    pub agent_position: Position,
    pub goal_position: Position,
    pub obstacles: HashSet<Position>,
    pub bounds: GridBounds,
}
