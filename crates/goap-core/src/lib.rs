//! World state, action contract and tick executor for goal-oriented action planning.
//!
//! The planner itself lives in `goap-planner`; this crate holds the pieces both the planner and
//! the runtime agree on: [`State`] and its overlap equivalence, the [`Action`] capability trait,
//! the read-only [`ActionRegistry`], the [`Plan`] value and the resumable [`Executor`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod executor;
pub mod plan;
pub mod registry;
pub mod state;

pub use action::{Action, StepStatus, DEFAULT_ACTION_COST};
pub use executor::{Executor, ExecutorError};
pub use plan::{Plan, PlanStats};
pub use registry::ActionRegistry;
pub use state::{distinct, equivalent, merge, State};
