//! Demo configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use goap_core::State;
use goap_planner::PlannerConfig;
use serde::{Deserialize, Serialize};

use crate::elevator;

/// Demo configuration, loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Delay between executor ticks
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Search limits
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Initial elevator state
    #[serde(default = "default_start")]
    pub start: State,

    /// Desired elevator state
    #[serde(default = "default_goal")]
    pub goal: State,
}

fn default_tick_ms() -> u64 {
    1000
}
fn default_start() -> State {
    elevator::state(0, true)
}
fn default_goal() -> State {
    elevator::state(4, true)
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            planner: PlannerConfig::default(),
            start: default_start(),
            goal: default_goal(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Start and goal states with command-line overrides applied.
    ///
    /// Overrides replace only the floor and door facts; anything else the file sets is kept.
    pub fn trip_states(
        &self,
        from: Option<i64>,
        to: Option<i64>,
        door: Option<u8>,
    ) -> (State, State) {
        let mut start = self.start.clone();
        let mut goal = self.goal.clone();
        if let Some(from) = from {
            start.set(elevator::FLOOR, from);
        }
        if let Some(door) = door {
            start.set(elevator::DOOR_OPEN, i64::from(door != 0));
        }
        if let Some(to) = to {
            goal.set(elevator::FLOOR, to);
        }
        (start, goal)
    }
}
