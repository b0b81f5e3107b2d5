use crate::common::{AggregateRoot, DomainError, DomainResult};
use crate::domains::environment::{Perception, Position};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::events::{MoveDecision, NavigationEvent};
use super::history::VisitHistory;

/// The deciding side of the simulation: tracks where it has been and
/// greedily picks the passable unvisited neighbor nearest the goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigator {
    pub id: String,
    pub position: Position,
    pub history: VisitHistory,
    pub version: u64,
    #[serde(skip)]
    uncommitted_events: Vec<NavigationEvent>,
}

impl Navigator {
    pub fn new(id: String, start: Position) -> Self {
        let mut navigator = Self {
            id: id.clone(),
            position: start,
            history: VisitHistory::seeded(start),
            version: 0,
            uncommitted_events: Vec::new(),
        };

        let event = NavigationEvent::NavigatorCreated {
            navigator_id: id,
            start,
            timestamp: Utc::now(),
        };

        navigator.stage(event);
        navigator
    }

    fn stage(&mut self, event: NavigationEvent) {
        self.uncommitted_events.push(event);
    }

    /// Pick the next position from the given perception.
    ///
    /// Greedy policy: of the in-bounds, non-obstacle, unvisited neighbors,
    /// take the one with the smallest Manhattan distance to the goal
    /// (generation order down, up, right, left breaks ties). With no such
    /// neighbor, fall back to the most recently visited cell, consuming it
    /// from history. With an empty history as well, stay put.
    pub fn select_action(&mut self, perception: &Perception) -> DomainResult<Position> {
        if perception.agent_position != self.position {
            return Err(DomainError::PerceptionMismatch {
                reason: format!(
                    "Environment reports the agent at ({}, {}) but the navigator is at ({}, {})",
                    perception.agent_position.row,
                    perception.agent_position.col,
                    self.position.row,
                    self.position.col
                ),
            });
        }

        let goal = perception.goal_position;
        let mut candidates: Vec<Position> = self
            .position
            .neighbors()
            .into_iter()
            .filter(|candidate| perception.bounds.contains(candidate))
            .filter(|candidate| !perception.obstacles.contains(candidate))
            .filter(|candidate| !self.history.contains(candidate))
            .collect();
        // Stable sort keeps the direction order among equally close cells.
        candidates.sort_by_key(|candidate| candidate.manhattan_distance(&goal));

        let (target, decision) = if let Some(closest) = candidates.first() {
            (*closest, MoveDecision::Advance)
        } else if let Some(previous) = self.history.latest() {
            (previous, MoveDecision::Backtrack)
        } else {
            (self.position, MoveDecision::Hold)
        };

        let event = NavigationEvent::MoveChosen {
            navigator_id: self.id.clone(),
            from: self.position,
            to: target,
            decision,
            timestamp: Utc::now(),
        };
        self.stage(event.clone());
        self.apply(&event)?;

        Ok(target)
    }

    /// Commit a move: the pre-update position enters history, then the
    /// new position becomes current.
    pub fn update_state(&mut self, new_position: Position) -> DomainResult<()> {
        let event = NavigationEvent::PositionCommitted {
            navigator_id: self.id.clone(),
            previous: self.position,
            current: new_position,
            timestamp: Utc::now(),
        };
        self.stage(event.clone());
        self.apply(&event)
    }
}

impl AggregateRoot for Navigator {
    type Event = NavigationEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            NavigationEvent::NavigatorCreated {
                navigator_id,
                start,
                ..
            } => {
                self.id = navigator_id.clone();
                self.position = *start;
                self.history = VisitHistory::seeded(*start);
            }
            NavigationEvent::MoveChosen { decision, .. } => {
                if *decision == MoveDecision::Backtrack {
                    self.history.remove_latest();
                }
            }
            NavigationEvent::PositionCommitted {
                previous, current, ..
            } => {
                self.history.insert(*previous);
                self.position = *current;
            }
        }
        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(&mut self.uncommitted_events)
    }
}
