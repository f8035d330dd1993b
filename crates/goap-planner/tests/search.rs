use goap_core::{Action, ActionRegistry, Executor, State, StepStatus};
use goap_planner::{GoapPlanner, PlanError, PlannerConfig};
use proptest::prelude::*;

/// Moves `fact` from `from` to `to` in one tick.
#[derive(Debug, Clone, Copy)]
struct Jump {
    fact: &'static str,
    from: i64,
    to: i64,
    cost: u32,
}

impl Action for Jump {
    fn preconditions(&self, _initial: &State, _goal: &State) -> State {
        State::new().with(self.fact, self.from)
    }

    fn result_effect(&self, _initial: &State, _goal: &State) -> State {
        State::new().with(self.fact, self.to)
    }

    fn cost(&self, _initial: &State, _goal: &State) -> u32 {
        self.cost
    }

    fn step(&self, current: &mut State, _goal: &State) -> StepStatus {
        current.set(self.fact, self.to);
        StepStatus::Complete
    }
}

fn jump(fact: &'static str, from: i64, to: i64, cost: u32) -> Jump {
    Jump {
        fact,
        from,
        to,
        cost,
    }
}

fn toggles() -> ActionRegistry {
    ActionRegistry::new()
        .with("light_on", jump("light", 0, 1, 1))
        .with("light_off", jump("light", 1, 0, 1))
}

#[test]
fn cyclic_domain_hits_expansion_budget() {
    let registry = toggles();
    let planner = GoapPlanner::new(&registry).with_config(PlannerConfig {
        max_expansions: Some(64),
        visited_guard: false,
    });

    // The goal shares no fact with anything the actions produce.
    let start = State::new().with("light", 0);
    let goal = State::new().with("door", 1);

    assert_eq!(
        planner.plan(&start, &goal),
        Err(PlanError::ExpansionBudgetExhausted { limit: 64 })
    );
}

#[test]
fn visited_guard_turns_cycle_into_unreachable() {
    let registry = toggles();
    let planner = GoapPlanner::new(&registry).with_config(PlannerConfig {
        max_expansions: None,
        visited_guard: true,
    });

    let start = State::new().with("light", 0);
    let goal = State::new().with("door", 1);

    assert_eq!(
        planner.plan(&start, &goal),
        Err(PlanError::Unreachable { expansions: 2 })
    );
}

#[test]
fn equal_costs_resolve_to_first_inserted_candidate() {
    // Registration order differs from name order on purpose: enumeration is by name.
    let registry = ActionRegistry::new()
        .with("beta", jump("g", 0, 1, 1))
        .with("alpha", jump("g", 0, 1, 1));
    let planner = GoapPlanner::new(&registry);

    let start = State::new().with("g", 0);
    let goal = State::new().with("g", 1);

    for _ in 0..5 {
        let plan = planner.plan(&start, &goal).expect("plan");
        assert_eq!(plan.actions, vec!["alpha"]);
        assert_eq!(plan.cost, 1);
    }
}

#[test]
fn goal_test_is_loose_overlap() {
    // Only `a` is shared with the goal; `b` is never looked at.
    let registry = ActionRegistry::new().with("set_a", jump("a", 0, 1, 3));
    let planner = GoapPlanner::new(&registry);

    let start = State::new().with("a", 0).with("b", 7);
    let goal = State::new().with("a", 1).with("c", 9);

    let plan = planner.plan(&start, &goal).expect("plan");
    assert_eq!(plan.actions, vec!["set_a"]);
    assert_eq!(plan.state, State::new().with("a", 1).with("b", 7));
}

#[test]
fn plan_executes_to_planned_state() {
    let registry = ActionRegistry::new()
        .with("one", jump("x", 0, 1, 1))
        .with("two", jump("x", 1, 2, 1))
        .with("three", jump("x", 2, 3, 1));
    let planner = GoapPlanner::new(&registry);

    let start = State::new().with("x", 0);
    let goal = State::new().with("x", 3);
    let plan = planner.plan(&start, &goal).expect("plan");
    assert_eq!(plan.actions, vec!["one", "two", "three"]);

    let mut live = start.clone();
    let mut exec = Executor::from_plan(&registry, &plan, goal);
    let ticks = exec.run_to_completion(&mut live, 16).expect("finishes");
    assert_eq!(ticks, 3);
    assert_eq!(live, plan.state);
}

/// Cheapest cost from 0 to `n` on a line with +1 and +2 hops.
fn shortest(step: &[u32], skip: &[u32], n: usize) -> u64 {
    let mut best = vec![u64::MAX; n + 1];
    best[0] = 0;
    for i in 0..n {
        if best[i] == u64::MAX {
            continue;
        }
        best[i + 1] = best[i + 1].min(best[i] + u64::from(step[i]));
        if i + 2 <= n {
            best[i + 2] = best[i + 2].min(best[i] + u64::from(skip[i]));
        }
    }
    best[n]
}

fn ladder(step: &[u32], skip: &[u32], n: usize) -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    for i in 0..n {
        let from = i as i64;
        registry.register(format!("step_{i:02}"), jump("pos", from, from + 1, step[i]));
        if i + 2 <= n {
            registry.register(format!("skip_{i:02}"), jump("pos", from, from + 2, skip[i]));
        }
    }
    registry
}

proptest! {
    #[test]
    fn finds_cheapest_path_on_ladders(
        step in prop::collection::vec(0u32..6, 6),
        skip in prop::collection::vec(0u32..12, 6),
        guard in any::<bool>(),
    ) {
        let n = 6;
        let registry = ladder(&step, &skip, n);
        let planner = GoapPlanner::new(&registry).with_config(PlannerConfig {
            max_expansions: None,
            visited_guard: guard,
        });

        let plan = planner
            .plan(&State::new().with("pos", 0), &State::new().with("pos", n as i64))
            .expect("ladder is always solvable");

        prop_assert_eq!(plan.cost, shortest(&step, &skip, n));

        let replayed: u64 = {
            let mut state = State::new().with("pos", 0);
            let goal = State::new().with("pos", n as i64);
            let mut total = 0u64;
            for name in &plan.actions {
                let action = registry.get(name).expect("planned names exist");
                total += u64::from(action.cost(&state, &goal));
                state = action.total_result(&state, &goal);
            }
            prop_assert_eq!(&state, &plan.state);
            total
        };
        prop_assert_eq!(replayed, plan.cost);
    }
}
