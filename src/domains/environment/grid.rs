use serde::{Deserialize, Serialize};

use super::types::{GridBounds, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMarker {
    Empty,
    Obstacle,
    Goal,
    Agent,
}

impl CellMarker {
    pub fn as_char(&self) -> char {
        match self {
            CellMarker::Empty => ' ',
            CellMarker::Obstacle => 'X',
            CellMarker::Goal => 'G',
            CellMarker::Agent => 'A',
        }
    }
}

/// Row-major board of cell markers. Built once at environment
/// construction; afterwards only the agent marker moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<CellMarker>>,
}

impl Grid {
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![CellMarker::Empty; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.cells.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn bounds(&self) -> GridBounds {
        GridBounds {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Precondition: `position` is within bounds.
    pub fn marker_at(&self, position: &Position) -> CellMarker {
        self.cells[position.row as usize][position.col as usize]
    }

    /// Precondition: `position` is within bounds.
    pub fn set_marker(&mut self, position: &Position, marker: CellMarker) {
        self.cells[position.row as usize][position.col as usize] = marker;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellMarker]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}
