use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domains::environment::Position;

/// Insertion-ordered set of previously occupied cells.
///
/// Doubles as the backtrack pool: entries are consumed most-recent-first,
/// and a consumed entry may be visited again later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitHistory {
    order: Vec<Position>,
    members: HashSet<Position>,
}

impl VisitHistory {
    pub fn seeded(start: Position) -> Self {
        Self {
            order: vec![start],
            members: HashSet::from([start]),
        }
    }

    /// Returns false if the position was already recorded.
    pub fn insert(&mut self, position: Position) -> bool {
        if !self.members.insert(position) {
            return false;
        }
        self.order.push(position);
        true
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.members.contains(position)
    }

    pub fn latest(&self) -> Option<Position> {
        self.order.last().copied()
    }

    pub fn remove_latest(&mut self) -> Option<Position> {
        let position = self.order.pop()?;
        self.members.remove(&position);
        Some(position)
    }

    /// Visited cells in insertion order.
    pub fn positions(&self) -> &[Position] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
