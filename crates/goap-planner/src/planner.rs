use core::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use goap_core::{equivalent, ActionRegistry, Plan, PlanStats, State};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PlanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Upper bound on expanded nodes. Hitting it fails the search with
    /// [`PlanError::ExpansionBudgetExhausted`]. `None` searches until the open set drains, which
    /// only terminates on effectively acyclic domains.
    pub max_expansions: Option<usize>,

    /// Skip nodes whose state was already expanded.
    ///
    /// Nodes leave the open set in non-decreasing cost order, so the first expansion of a state is
    /// a cheapest one and the cost of the returned plan is unchanged.
    pub visited_guard: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_expansions: Some(4096),
            visited_guard: false,
        }
    }
}

/// Uninformed best-first search over action sequences.
///
/// Candidates are ranked by accumulated cost only; equal costs resolve in insertion order, and
/// actions are tried in registry (name) order, so identical inputs always yield the same plan.
#[derive(Debug, Clone, Copy)]
pub struct GoapPlanner<'r> {
    registry: &'r ActionRegistry,
    config: PlannerConfig,
}

struct OpenNode {
    cost: u64,
    tie: u64,
    actions: Vec<String>,
    state: State,
}

impl OpenNode {
    fn key(&self) -> (u64, u64) {
        (self.cost, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'r> GoapPlanner<'r> {
    pub fn new(registry: &'r ActionRegistry) -> Self {
        Self {
            registry,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn registry(&self) -> &'r ActionRegistry {
        self.registry
    }

    /// Find the cheapest action sequence leading from `start` to a state
    /// [`equivalent`](goap_core::equivalent) to `goal`.
    ///
    /// If `start` already satisfies `goal` the plan is empty with cost 0.
    pub fn plan(&self, start: &State, goal: &State) -> Result<Plan> {
        if equivalent(start, goal) {
            tracing::debug!("Start state already satisfies goal");
            return Ok(Plan::empty(start.clone()));
        }

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut visited: BTreeSet<State> = BTreeSet::new();
        let mut tie: u64 = 0;
        let mut stats = PlanStats::default();

        open.push(OpenNode {
            cost: 0,
            tie,
            actions: Vec::new(),
            state: start.clone(),
        });
        tie += 1;
        stats.generated = 1;
        stats.open_high_water = 1;

        while let Some(node) = open.pop() {
            if equivalent(&node.state, goal) {
                tracing::info!(
                    actions = ?node.actions,
                    cost = node.cost,
                    expansions = stats.expansions,
                    "Plan found"
                );
                return Ok(Plan {
                    actions: node.actions,
                    state: node.state,
                    cost: node.cost,
                    stats,
                });
            }

            if self.config.visited_guard && !visited.insert(node.state.clone()) {
                continue;
            }

            stats.expansions += 1;
            if let Some(limit) = self.config.max_expansions {
                if stats.expansions > limit {
                    tracing::warn!(limit, open = open.len(), "Expansion budget exhausted");
                    return Err(PlanError::ExpansionBudgetExhausted { limit });
                }
            }

            tracing::trace!(
                cost = node.cost,
                depth = node.actions.len(),
                open = open.len(),
                "Expanding node"
            );

            for (name, action) in self.registry.all() {
                let pre = action.preconditions(&node.state, goal);
                if !equivalent(&pre, &node.state) {
                    continue;
                }

                let step_cost = action.cost(&node.state, goal);
                let mut actions = Vec::with_capacity(node.actions.len() + 1);
                actions.extend(node.actions.iter().cloned());
                actions.push(name.to_string());

                open.push(OpenNode {
                    cost: node.cost.saturating_add(u64::from(step_cost)),
                    tie,
                    actions,
                    state: action.total_result(&node.state, goal),
                });
                tie += 1;
                stats.generated += 1;
            }

            stats.open_high_water = stats.open_high_water.max(open.len());
        }

        tracing::debug!(expansions = stats.expansions, "Open set exhausted");
        Err(PlanError::Unreachable {
            expansions: stats.expansions,
        })
    }
}
