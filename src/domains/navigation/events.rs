use crate::common::DomainEvent;
use crate::domains::environment::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a move was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDecision {
    /// An unvisited, passable neighbor closest to the goal.
    Advance,
    /// No passable unvisited neighbor; returning to the most recently
    /// visited cell, which is consumed from history.
    Backtrack,
    /// No candidates and an empty history; staying put.
    Hold,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NavigationEvent {
    NavigatorCreated {
        navigator_id: String,
        start: Position,
        timestamp: DateTime<Utc>,
    },
    MoveChosen {
        navigator_id: String,
        from: Position,
        to: Position,
        decision: MoveDecision,
        timestamp: DateTime<Utc>,
    },
    PositionCommitted {
        navigator_id: String,
        previous: Position,
        current: Position,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for NavigationEvent {
    fn event_type(&self) -> &'static str {
        match self {
            NavigationEvent::NavigatorCreated { .. } => "NavigatorCreated",
            NavigationEvent::MoveChosen { .. } => "MoveChosen",
            NavigationEvent::PositionCommitted { .. } => "PositionCommitted",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            NavigationEvent::NavigatorCreated { navigator_id, .. } => navigator_id,
            NavigationEvent::MoveChosen { navigator_id, .. } => navigator_id,
            NavigationEvent::PositionCommitted { navigator_id, .. } => navigator_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            NavigationEvent::NavigatorCreated { timestamp, .. } => *timestamp,
            NavigationEvent::MoveChosen { timestamp, .. } => *timestamp,
            NavigationEvent::PositionCommitted { timestamp, .. } => *timestamp,
        }
    }
}
