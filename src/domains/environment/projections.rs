// Environment projections - read models for presentation
use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::Environment;

/// Textual read model of the board: one space-joined line per grid row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFrame {
    pub lines: Vec<String>,
}

impl GridFrame {
    pub fn project(environment: &Environment) -> Self {
        let lines = environment
            .grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|marker| marker.as_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Self { lines }
    }
}

impl fmt::Display for GridFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
