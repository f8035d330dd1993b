#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::State;

/// Search bookkeeping reported alongside a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanStats {
    /// Nodes popped from the open set and expanded.
    pub expansions: usize,
    /// Candidate nodes pushed onto the open set (the seed included).
    pub generated: usize,
    /// Largest open-set size seen during the search.
    pub open_high_water: usize,
}

/// Planner output: ordered action names, the state they lead to and their total cost.
///
/// An empty `actions` list is a successful plan (the start already satisfied the goal).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    pub actions: Vec<String>,
    pub state: State,
    pub cost: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: PlanStats,
}

impl Plan {
    /// The "nothing to do" plan for a start state that already satisfies the goal.
    pub fn empty(state: State) -> Self {
        Self {
            actions: Vec::new(),
            state,
            cost: 0,
            stats: PlanStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
