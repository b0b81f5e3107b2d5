use crate::common::{AggregateRoot, DomainError, DomainResult};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::events::EnvironmentEvent;
use super::grid::{CellMarker, Grid};
use super::types::{GridBounds, Perception, Position};

/// Ground truth of the simulated world: the board, the obstacle layout,
/// the goal cell and the authoritative agent position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: String,
    pub grid: Grid,
    pub obstacles: HashSet<Position>,
    pub goal_position: Position,
    pub agent_position: Position,
    pub version: u64,
    #[serde(skip)]
    uncommitted_events: Vec<EnvironmentEvent>,
}

impl Environment {
    pub const START_POSITION: Position = Position { row: 0, col: 0 };

    /// Build an environment with a randomly sampled obstacle layout.
    ///
    /// Sampling rejects the start and goal cells and loops until
    /// `obstacle_count` distinct positions are found; the caller keeps the
    /// count well below the free-cell capacity (the config layer enforces
    /// `count < width * height - 2`).
    pub fn new(
        id: String,
        width: usize,
        height: usize,
        obstacle_count: usize,
        goal: Position,
        rng: &mut impl Rng,
    ) -> DomainResult<Self> {
        Self::validate_geometry(width, height, &goal)?;

        let mut obstacles = HashSet::new();
        while obstacles.len() < obstacle_count {
            let candidate = Position::new(
                rng.gen_range(0..height as i32),
                rng.gen_range(0..width as i32),
            );
            if candidate != Self::START_POSITION && candidate != goal {
                obstacles.insert(candidate);
            }
        }

        Self::with_obstacles(id, width, height, obstacles, goal)
    }

    /// Build an environment with an explicit obstacle layout.
    pub fn with_obstacles(
        id: String,
        width: usize,
        height: usize,
        obstacles: HashSet<Position>,
        goal: Position,
    ) -> DomainResult<Self> {
        Self::validate_geometry(width, height, &goal)?;

        let bounds = GridBounds { width, height };
        for obstacle in &obstacles {
            if !bounds.contains(obstacle) {
                return Err(DomainError::InvalidCommand {
                    reason: format!(
                        "Obstacle ({}, {}) is outside the {}x{} grid",
                        obstacle.row, obstacle.col, width, height
                    ),
                });
            }
            if *obstacle == Self::START_POSITION || *obstacle == goal {
                return Err(DomainError::InvalidCommand {
                    reason: format!(
                        "Obstacle ({}, {}) collides with the start or goal cell",
                        obstacle.row, obstacle.col
                    ),
                });
            }
        }

        let mut grid = Grid::blank(width, height);
        for obstacle in &obstacles {
            grid.set_marker(obstacle, CellMarker::Obstacle);
        }
        grid.set_marker(&goal, CellMarker::Goal);
        grid.set_marker(&Self::START_POSITION, CellMarker::Agent);

        let mut environment = Self {
            id: id.clone(),
            grid,
            obstacles,
            goal_position: goal,
            agent_position: Self::START_POSITION,
            version: 0,
            uncommitted_events: Vec::new(),
        };

        let event = EnvironmentEvent::EnvironmentProvisioned {
            environment_id: id,
            width,
            height,
            obstacle_count: environment.obstacles.len(),
            goal,
            timestamp: Utc::now(),
        };

        environment.stage(event);
        Ok(environment)
    }

    fn stage(&mut self, event: EnvironmentEvent) {
        self.uncommitted_events.push(event);
    }

    fn validate_geometry(width: usize, height: usize, goal: &Position) -> DomainResult<()> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidCommand {
                reason: format!("Grid dimensions must be positive, got {}x{}", width, height),
            });
        }
        let bounds = GridBounds { width, height };
        if !bounds.contains(goal) {
            return Err(DomainError::InvalidCommand {
                reason: format!(
                    "Goal ({}, {}) is outside the {}x{} grid",
                    goal.row, goal.col, width, height
                ),
            });
        }
        Ok(())
    }

    /// Move the agent marker. Precondition: `new_position` is a valid grid
    /// cell; validation happens on the navigator side.
    pub fn update_agent_position(&mut self, new_position: Position) -> DomainResult<()> {
        let event = EnvironmentEvent::AgentMarkerMoved {
            environment_id: self.id.clone(),
            from: self.agent_position,
            to: new_position,
            timestamp: Utc::now(),
        };
        self.stage(event.clone());
        self.apply(&event)
    }

    /// Full-observability snapshot for the navigator.
    pub fn perception(&self) -> Perception {
        Perception {
            agent_position: self.agent_position,
            goal_position: self.goal_position,
            obstacles: self.obstacles.clone(),
            bounds: self.grid.bounds(),
        }
    }
}

impl AggregateRoot for Environment {
    type Event = EnvironmentEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            EnvironmentEvent::EnvironmentProvisioned { .. } => {
                // State is established by the constructor.
            }
            EnvironmentEvent::AgentMarkerMoved { from, to, .. } => {
                self.grid.set_marker(from, CellMarker::Empty);
                self.agent_position = *to;
                self.grid.set_marker(to, CellMarker::Agent);
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
