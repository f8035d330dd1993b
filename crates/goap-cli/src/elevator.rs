//! Elevator action catalogue: open the doors, close the doors, move the car.

use goap_core::{Action, ActionRegistry, State, StepStatus};

/// Current floor of the car.
pub const FLOOR: &str = "floor";
/// 1 when the doors are open, 0 when closed.
pub const DOOR_OPEN: &str = "door_open";

pub const OPEN: &str = "open";
pub const CLOSE: &str = "close";
pub const MOVE: &str = "move";

/// Value no door ever reports; used to disable an action for a given comparison.
const DOOR_NEVER: i64 = -1;

pub fn registry() -> ActionRegistry {
    ActionRegistry::new()
        .with(OPEN, OpenDoors)
        .with(CLOSE, CloseDoors)
        .with(MOVE, MoveCar)
}

pub fn state(floor: i64, door_open: bool) -> State {
    State::new()
        .with(FLOOR, floor)
        .with(DOOR_OPEN, i64::from(door_open))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenDoors;

impl Action for OpenDoors {
    fn preconditions(&self, _initial: &State, _goal: &State) -> State {
        State::new().with(DOOR_OPEN, 0)
    }

    fn result_effect(&self, _initial: &State, _goal: &State) -> State {
        State::new().with(DOOR_OPEN, 1)
    }

    fn cost(&self, _initial: &State, _goal: &State) -> u32 {
        1
    }

    fn step(&self, current: &mut State, _goal: &State) -> StepStatus {
        tracing::info!("Opening doors");
        current.set(DOOR_OPEN, 1);
        StepStatus::Complete
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CloseDoors;

impl Action for CloseDoors {
    fn preconditions(&self, _initial: &State, _goal: &State) -> State {
        State::new().with(DOOR_OPEN, 1)
    }

    fn result_effect(&self, _initial: &State, _goal: &State) -> State {
        State::new().with(DOOR_OPEN, 0)
    }

    fn cost(&self, _initial: &State, _goal: &State) -> u32 {
        1
    }

    fn step(&self, current: &mut State, _goal: &State) -> StepStatus {
        tracing::info!("Closing doors");
        current.set(DOOR_OPEN, 0);
        StepStatus::Complete
    }
}

/// Moves the car one floor per tick towards the goal floor. Doors must be closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveCar;

impl Action for MoveCar {
    fn preconditions(&self, initial: &State, goal: &State) -> State {
        match (initial.get(FLOOR), goal.get(FLOOR)) {
            // Already there: nothing to move.
            (Some(from), Some(to)) if from == to => State::new().with(DOOR_OPEN, DOOR_NEVER),
            (Some(_), Some(_)) => State::new().with(DOOR_OPEN, 0),
            // Unknown floors cannot be planned over.
            _ => State::new().with(DOOR_OPEN, DOOR_NEVER),
        }
    }

    fn result_effect(&self, _initial: &State, goal: &State) -> State {
        match goal.get(FLOOR) {
            Some(to) => State::new().with(FLOOR, to),
            None => State::new(),
        }
    }

    fn cost(&self, initial: &State, goal: &State) -> u32 {
        match (initial.get(FLOOR), goal.get(FLOOR)) {
            (Some(from), Some(to)) => u32::try_from(from.abs_diff(to)).unwrap_or(u32::MAX),
            _ => goap_core::DEFAULT_ACTION_COST,
        }
    }

    fn step(&self, current: &mut State, goal: &State) -> StepStatus {
        let Some(to) = goal.get(FLOOR) else {
            tracing::warn!("Goal has no floor; nothing to move towards");
            return StepStatus::Complete;
        };
        let Some(floor) = current.get_mut(FLOOR) else {
            tracing::warn!("Car position unknown; cannot move");
            return StepStatus::Complete;
        };

        if *floor < to {
            *floor += 1;
        } else if *floor > to {
            *floor -= 1;
        }
        tracing::info!(floor = *floor, target = to, "Moving car");

        StepStatus::from(*floor == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goap_core::equivalent;

    #[test]
    fn move_disabled_when_already_on_goal_floor() {
        let here = state(3, false);
        let goal = state(3, true);
        let pre = MoveCar.preconditions(&here, &goal);
        assert!(!equivalent(&pre, &here));
    }

    #[test]
    fn plans_at_lowest_representable_floor() {
        let start = state(i64::MIN, true);
        let goal = state(i64::MIN, false);
        let plan = goap_planner::GoapPlanner::new(&registry())
            .plan(&start, &goal)
            .expect("plan");
        assert_eq!(plan.actions, vec![CLOSE]);
        assert_eq!(plan.cost, 1);
    }

    #[test]
    fn move_requires_closed_doors() {
        let goal = state(5, true);
        assert!(equivalent(
            &MoveCar.preconditions(&state(1, false), &goal),
            &state(1, false)
        ));
        assert!(!equivalent(
            &MoveCar.preconditions(&state(1, true), &goal),
            &state(1, true)
        ));
    }

    #[test]
    fn move_disabled_when_floor_unknown() {
        let here = State::new().with(DOOR_OPEN, 0);
        let goal = state(2, true);
        assert!(!equivalent(&MoveCar.preconditions(&here, &goal), &here));
    }

    #[test]
    fn move_cost_is_floor_distance() {
        assert_eq!(MoveCar.cost(&state(4, false), &state(-2, true)), 6);
        assert_eq!(MoveCar.cost(&state(0, false), &state(4, true)), 4);
    }

    #[test]
    fn move_steps_one_floor_per_tick() {
        let goal = state(-2, true);
        let mut current = state(0, false);
        assert_eq!(MoveCar.step(&mut current, &goal), StepStatus::Running);
        assert_eq!(current.get(FLOOR), Some(-1));
        assert_eq!(MoveCar.step(&mut current, &goal), StepStatus::Complete);
        assert_eq!(current.get(FLOOR), Some(-2));
    }

    #[test]
    fn doors_toggle() {
        let goal = state(0, true);
        let mut current = state(0, true);
        assert!(CloseDoors.step(&mut current, &goal).is_complete());
        assert_eq!(current.get(DOOR_OPEN), Some(0));
        assert!(OpenDoors.step(&mut current, &goal).is_complete());
        assert_eq!(current.get(DOOR_OPEN), Some(1));
    }
}
