//! Elevator demo for the GOAP planner: the action catalogue, YAML configuration and the
//! plan-then-tick driver used by the `goap` binary.

pub mod config;
pub mod elevator;
pub mod trip;

pub use config::DemoConfig;
pub use trip::{plan_trip, travel, TripReport};
