use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EnvironmentEvent {
    EnvironmentProvisioned {
        environment_id: String,
        width: usize,
        height: usize,
        obstacle_count: usize,
        goal: Position,
        timestamp: DateTime<Utc>,
    },
    AgentMarkerMoved {
        environment_id: String,
        from: Position,
        to: Position,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for EnvironmentEvent {
    fn event_type(&self) -> &'static str {
        match self {
            EnvironmentEvent::EnvironmentProvisioned { .. } => "EnvironmentProvisioned",
            EnvironmentEvent::AgentMarkerMoved { .. } => "AgentMarkerMoved",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            EnvironmentEvent::EnvironmentProvisioned { environment_id, .. } => environment_id,
            EnvironmentEvent::AgentMarkerMoved { environment_id, .. } => environment_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            EnvironmentEvent::EnvironmentProvisioned { timestamp, .. } => *timestamp,
            EnvironmentEvent::AgentMarkerMoved { timestamp, .. } => *timestamp,
        }
    }
}
