// Navigation projections - simplified step telemetry
use serde::{Deserialize, Serialize};

use super::events::{MoveDecision, NavigationEvent};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationProjection {
    pub navigator_id: String,
    pub advances: usize,
    pub backtracks: usize,
    pub holds: usize,
    pub positions_committed: usize,
}

impl NavigationProjection {
    pub fn for_navigator(navigator_id: String) -> Self {
        Self {
            navigator_id,
            advances: 0,
            backtracks: 0,
            holds: 0,
            positions_committed: 0,
        }
    }

    pub fn record(&mut self, event: &NavigationEvent) {
        match event {
            NavigationEvent::NavigatorCreated { .. } => {}
            NavigationEvent::MoveChosen { decision, .. } => match decision {
                MoveDecision::Advance => self.advances += 1,
                MoveDecision::Backtrack => self.backtracks += 1,
                MoveDecision::Hold => self.holds += 1,
            },
            NavigationEvent::PositionCommitted { .. } => self.positions_committed += 1,
        }
    }

    pub fn moves_total(&self) -> usize {
        self.advances + self.backtracks + self.holds
    }
}
