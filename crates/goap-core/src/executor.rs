use std::collections::VecDeque;

use thiserror::Error;

use crate::{ActionRegistry, Plan, State, StepStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    #[error("plan still running after {limit} ticks")]
    TickBudgetExhausted { limit: usize },
}

/// Resumable, step-driven plan runner.
///
/// Holds the queue of action names still to run, the action currently executing and the goal the
/// actions step towards. The live world state stays with the caller and is handed in on every
/// [`Executor::tick`], so the caller observes each mutation in place and several executors can
/// run independent plans side by side.
#[derive(Debug)]
pub struct Executor<'r> {
    registry: &'r ActionRegistry,
    pending: VecDeque<String>,
    current: Option<String>,
    goal: State,
    ticks: usize,
    completed: usize,
}

impl<'r> Executor<'r> {
    pub fn new(
        registry: &'r ActionRegistry,
        actions: impl IntoIterator<Item = String>,
        goal: State,
    ) -> Self {
        Self {
            registry,
            pending: actions.into_iter().collect(),
            current: None,
            goal,
            ticks: 0,
            completed: 0,
        }
    }

    pub fn from_plan(registry: &'r ActionRegistry, plan: &Plan, goal: State) -> Self {
        Self::new(registry, plan.actions.iter().cloned(), goal)
    }

    /// Drop whatever is queued or running and start over with a new sequence and goal.
    ///
    /// The interrupted action is not notified.
    pub fn load(&mut self, actions: impl IntoIterator<Item = String>, goal: State) {
        if let Some(current) = self.current.take() {
            tracing::debug!(action = %current, "Discarding running action");
        }
        self.pending = actions.into_iter().collect();
        self.goal = goal;
    }

    /// Run one step of the front action against `state`.
    ///
    /// Returns `false` once there is nothing left to run (and leaves `state` untouched in that
    /// case), `true` whenever a step was executed. An action is dequeued only after the previous
    /// one reported [`StepStatus::Complete`].
    ///
    /// # Panics
    ///
    /// If the next action name is not in the registry. Plans come from the same registry, so this
    /// is an invariant violation rather than a runtime condition.
    pub fn tick(&mut self, state: &mut State) -> bool {
        let name = match self.current.take() {
            Some(name) => name,
            None => {
                let Some(next) = self.pending.pop_front() else {
                    return false;
                };
                tracing::debug!(action = %next, remaining = self.pending.len(), "Starting action");
                next
            }
        };

        let Some(action) = self.registry.get(&name) else {
            panic!("executor referenced unknown action `{name}`");
        };

        self.ticks += 1;
        match action.step(state, &self.goal) {
            StepStatus::Running => {
                tracing::trace!(action = %name, tick = self.ticks, "Action running");
                self.current = Some(name);
            }
            StepStatus::Complete => {
                self.completed += 1;
                tracing::debug!(action = %name, tick = self.ticks, "Action complete");
            }
        }
        true
    }

    /// Tick until the queue drains. Returns the number of working ticks.
    ///
    /// At most `max_ticks` steps run; work left after that is reported as
    /// [`ExecutorError::TickBudgetExhausted`].
    pub fn run_to_completion(
        &mut self,
        state: &mut State,
        max_ticks: usize,
    ) -> Result<usize, ExecutorError> {
        let mut worked = 0usize;
        loop {
            if self.is_idle() {
                return Ok(worked);
            }
            if worked >= max_ticks {
                return Err(ExecutorError::TickBudgetExhausted { limit: max_ticks });
            }
            if !self.tick(state) {
                return Ok(worked);
            }
            worked += 1;
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn pending(&self) -> impl Iterator<Item = &str> + '_ {
        self.pending.iter().map(|s| s.as_str())
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Nothing running and nothing queued.
    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Working ticks executed since construction.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Actions that reported completion since construction.
    pub fn completed(&self) -> usize {
        self.completed
    }
}
