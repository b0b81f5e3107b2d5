use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub grid: GridConfig,
    pub obstacles: ObstacleConfig,
    pub goal: GoalConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub count: usize,
    /// Fixed seed for a reproducible layout; omit for a fresh one per run.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfig {
    pub row: i32,
    pub col: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub max_steps: u32,
    pub step_delay_ms: u64,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }
        if self.goal.row < 0
            || self.goal.col < 0
            || self.goal.row as usize >= self.grid.height
            || self.goal.col as usize >= self.grid.width
        {
            bail!(
                "Goal ({}, {}) lies outside the {}x{} grid",
                self.goal.row,
                self.goal.col,
                self.grid.width,
                self.grid.height
            );
        }
        // Obstacle placement rejection-samples over the whole grid, so the
        // count must leave room for the agent and the goal.
        let capacity = self.grid.width * self.grid.height;
        if self.obstacles.count >= capacity.saturating_sub(2) {
            bail!(
                "Obstacle count {} does not fit a {}x{} grid with agent and goal",
                self.obstacles.count,
                self.grid.width,
                self.grid.height
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 50,
                height: 30,
            },
            obstacles: ObstacleConfig {
                count: 150,
                seed: None,
            },
            goal: GoalConfig { row: 27, col: 40 },
            run: RunConfig {
                max_steps: 150,
                step_delay_ms: 100,
            },
        }
    }
}
