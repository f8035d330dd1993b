use crate::state::{merge, State};

/// Weight an action reports when it does not override [`Action::cost`].
pub const DEFAULT_ACTION_COST: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The action needs more ticks.
    Running,
    /// The action has finished; the executor moves on next tick.
    Complete,
}

impl StepStatus {
    pub fn is_complete(self) -> bool {
        matches!(self, StepStatus::Complete)
    }
}

impl From<bool> for StepStatus {
    fn from(complete: bool) -> Self {
        if complete {
            StepStatus::Complete
        } else {
            StepStatus::Running
        }
    }
}

/// A planning/execution unit.
///
/// Every method receives the state the action would start from (`initial`, or the live `current`
/// state for [`Action::step`]) and the goal the caller is planning towards, so preconditions,
/// effects and costs may depend on both.
///
/// Implementations are shared read-only between planning calls and executors, hence
/// `Send + Sync` and `&self` everywhere.
///
/// The default bodies only document the contract; real actions override all four.
pub trait Action: Send + Sync + 'static {
    /// Minimal partial state that must be [`equivalent`](crate::equivalent) to the start state for
    /// this action to be selectable. Returning a value the start state cannot match disables the
    /// action for this `(initial, goal)` pair.
    fn preconditions(&self, initial: &State, _goal: &State) -> State {
        initial.clone()
    }

    /// Only the facts this action changes.
    fn result_effect(&self, _initial: &State, goal: &State) -> State {
        goal.clone()
    }

    fn cost(&self, _initial: &State, _goal: &State) -> u32 {
        DEFAULT_ACTION_COST
    }

    /// Advance execution by one tick, mutating `current` in place.
    fn step(&self, _current: &mut State, _goal: &State) -> StepStatus {
        StepStatus::Complete
    }
}

impl dyn Action {
    /// Full projected state after this action: `initial` overlaid with the action's effect.
    pub fn total_result(&self, initial: &State, goal: &State) -> State {
        merge(initial, &self.result_effect(initial, goal))
    }
}
