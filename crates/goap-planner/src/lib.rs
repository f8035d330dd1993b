//! Deterministic best-first planner over a [`goap_core::ActionRegistry`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod planner;

pub use goap_core::{Plan, PlanStats};
pub use planner::{GoapPlanner, PlannerConfig};

use thiserror::Error;

/// Why planning produced no sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("goal unreachable: open set emptied after {expansions} expansions")]
    Unreachable { expansions: usize },

    #[error("search exhausted: expansion budget of {limit} reached")]
    ExpansionBudgetExhausted { limit: usize },
}

pub type Result<T> = std::result::Result<T, PlanError>;
