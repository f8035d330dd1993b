//! Plan a trip and drive it tick by tick.

use std::time::Duration;

use anyhow::{Context, Result};
use goap_core::{ActionRegistry, Executor, Plan, State};
use goap_planner::{GoapPlanner, PlannerConfig};

#[derive(Debug, Clone)]
pub struct TripReport {
    pub plan: Plan,
    /// Working ticks the executor needed.
    pub ticks: usize,
}

pub fn plan_trip(
    registry: &ActionRegistry,
    config: PlannerConfig,
    start: &State,
    goal: &State,
) -> Result<Plan> {
    GoapPlanner::new(registry)
        .with_config(config)
        .plan(start, goal)
        .context("Failed to plan trip")
}

/// Plan from the live `state` to `goal`, then tick the plan to completion, sleeping `tick`
/// between working ticks. `state` is updated in place.
pub async fn travel(
    registry: &ActionRegistry,
    config: PlannerConfig,
    state: &mut State,
    goal: &State,
    tick: Duration,
) -> Result<TripReport> {
    let plan = plan_trip(registry, config, state, goal)?;
    tracing::info!(actions = ?plan.actions, cost = plan.cost, "Executing plan");

    let mut executor = Executor::from_plan(registry, &plan, goal.clone());
    let mut ticks = 0usize;
    while executor.tick(state) {
        ticks += 1;
        tracing::debug!(tick = ticks, action = ?executor.current(), "Tick");
        if !tick.is_zero() {
            tokio::time::sleep(tick).await;
        }
    }

    Ok(TripReport { plan, ticks })
}
