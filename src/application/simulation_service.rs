// Simulation service - drives the perceive/decide/commit/render loop
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::common::{AggregateRoot, ApplicationResult, DomainError, EventEnvelope};
use crate::domains::environment::{Environment, GridFrame};
use crate::domains::navigation::{NavigationProjection, Navigator};
use crate::domains::pacing::DynStepPacer;
use crate::domains::render::DynRenderSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationOutcome {
    GoalReached { steps: u32 },
    StepLimitReached { steps: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub outcome: SimulationOutcome,
    pub telemetry: NavigationProjection,
    pub events_recorded: usize,
}

pub struct SimulationService {
    environment: Environment,
    navigator: Navigator,
    render_sink: DynRenderSink,
    pacer: DynStepPacer,
    max_steps: u32,
    run_id: Uuid,
    journal: Vec<EventEnvelope>,
}

impl SimulationService {
    pub fn new(
        environment: Environment,
        navigator: Navigator,
        render_sink: DynRenderSink,
        pacer: DynStepPacer,
        max_steps: u32,
    ) -> Self {
        Self {
            environment,
            navigator,
            render_sink,
            pacer,
            max_steps,
            run_id: Uuid::new_v4(),
            journal: Vec::new(),
        }
    }

    /// Run the loop to one of its two terminal states: the navigator
    /// lands on the goal, or the step cap fires.
    pub async fn run(&mut self) -> ApplicationResult<SimulationReport> {
        let goal = self.environment.goal_position;
        let mut telemetry =
            NavigationProjection::for_navigator(self.navigator.aggregate_id().to_string());

        info!(
            "Simulation {} started: goal at ({}, {}), step cap {}",
            self.run_id, goal.row, goal.col, self.max_steps
        );

        self.record_events(&mut telemetry)?;
        self.draw();

        let mut steps: u32 = 0;
        let outcome = loop {
            if steps >= self.max_steps {
                break SimulationOutcome::StepLimitReached { steps };
            }

            let perception = self.environment.perception();
            let next_position = self.navigator.select_action(&perception)?;
            self.navigator.update_state(next_position)?;
            self.environment.update_agent_position(next_position)?;

            self.record_events(&mut telemetry)?;
            self.draw();

            // The landing move does not bump the counter: the count only
            // advances on the non-terminal path.
            if next_position == goal {
                break SimulationOutcome::GoalReached { steps };
            }
            steps += 1;
            self.pacer.pause().await;
        };

        match outcome {
            SimulationOutcome::GoalReached { steps } => {
                info!("Simulation {} reached the goal after {} steps", self.run_id, steps);
            }
            SimulationOutcome::StepLimitReached { steps } => {
                info!(
                    "Simulation {} exhausted its {} step cap without reaching the goal",
                    self.run_id, steps
                );
            }
        }

        Ok(SimulationReport {
            outcome,
            telemetry,
            events_recorded: self.journal.len(),
        })
    }

    /// Drain both aggregates into the telemetry projection and the
    /// in-memory event journal.
    fn record_events(&mut self, telemetry: &mut NavigationProjection) -> ApplicationResult<()> {
        for event in self.navigator.take_uncommitted_events() {
            telemetry.record(&event);
            let envelope =
                EventEnvelope::record(&event, self.run_id).map_err(DomainError::from)?;
            debug!("Recorded {} for {}", envelope.event_type, envelope.aggregate_id);
            self.journal.push(envelope);
        }

        for event in self.environment.take_uncommitted_events() {
            let envelope =
                EventEnvelope::record(&event, self.run_id).map_err(DomainError::from)?;
            debug!("Recorded {} for {}", envelope.event_type, envelope.aggregate_id);
            self.journal.push(envelope);
        }

        Ok(())
    }

    fn draw(&self) {
        let frame = GridFrame::project(&self.environment);
        self.render_sink.draw_frame(&frame.to_string());
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn journal(&self) -> &[EventEnvelope] {
        &self.journal
    }
}
