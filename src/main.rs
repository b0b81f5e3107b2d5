use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use wayfarer::adapters::outbound::init_console_renderer;
use wayfarer::adapters::outbound::TokioStepPacer;
use wayfarer::application::{SimulationOutcome, SimulationService};
use wayfarer::domains::environment::{Environment, Position};
use wayfarer::domains::navigation::Navigator;
use wayfarer::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Wayfarer");

    // Load configuration, falling back to the built-in defaults
    let config = match Config::from_file("config.toml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Could not load config.toml ({}), using defaults", e);
            Config::default()
        }
    };
    config.validate()?;

    info!(
        "Grid {}x{}, {} obstacles, goal at ({}, {})",
        config.grid.width, config.grid.height, config.obstacles.count, config.goal.row, config.goal.col
    );

    let mut rng = match config.obstacles.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let environment = Environment::new(
        Uuid::new_v4().to_string(),
        config.grid.width,
        config.grid.height,
        config.obstacles.count,
        Position::new(config.goal.row, config.goal.col),
        &mut rng,
    )?;
    let navigator = Navigator::new(Uuid::new_v4().to_string(), Environment::START_POSITION);

    let render_sink = init_console_renderer();
    let pacer = Arc::new(TokioStepPacer::new(Duration::from_millis(
        config.run.step_delay_ms,
    )));

    let mut simulation = SimulationService::new(
        environment,
        navigator,
        render_sink,
        pacer,
        config.run.max_steps,
    );
    let report = simulation.run().await?;

    match report.outcome {
        SimulationOutcome::GoalReached { steps } => {
            println!("Agent found the goal in {} steps!", steps);
        }
        SimulationOutcome::StepLimitReached { .. } => {
            println!("Maximum number of steps reached without finding the goal.");
        }
    }

    Ok(())
}
