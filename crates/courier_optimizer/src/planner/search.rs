use fixedbitset::FixedBitSet;
use tracing::{debug, info};

use crate::planner::{command::Command, error::PlanError, plan::PlanResult};
use crate::problem::{delivery_problem::DeliveryProblem, location::Location, order::OrderIdx};
use crate::travel::travel_cost::TravelCost;
use crate::utils::enumerate_idx::EnumerateIdx;

/// Exact branch-and-bound over pick/drop sequences.
///
/// Every order must be picked up at its restaurant before it is dropped at
/// its consumer; subject to that precedence the search explores all action
/// interleavings depth-first and keeps the plan with the smallest makespan.
/// Subtrees are pruned with an admissible lower bound, so the returned plan
/// is still the true optimum.
pub struct BranchAndBound<'a, C: TravelCost> {
    problem: &'a DeliveryProblem,
    travel: C,
}

/// Mutable search state, mutated on entering a branch and restored on every
/// way out so sibling branches observe the prior state.
struct SearchState {
    picked: FixedBitSet,
    delivered: FixedBitSet,
    delivered_count: usize,
    steps: Vec<Command>,
    nodes: u64,
}

impl SearchState {
    fn new(order_count: usize) -> Self {
        Self {
            picked: FixedBitSet::with_capacity(order_count),
            delivered: FixedBitSet::with_capacity(order_count),
            delivered_count: 0,
            steps: Vec::with_capacity(order_count * 2),
            nodes: 0,
        }
    }

    fn is_picked(&self, index: OrderIdx) -> bool {
        self.picked.contains(index.get())
    }

    fn is_delivered(&self, index: OrderIdx) -> bool {
        self.delivered.contains(index.get())
    }

    fn mark_picked(&mut self, index: OrderIdx) {
        self.picked.insert(index.get());
    }

    fn unmark_picked(&mut self, index: OrderIdx) {
        self.picked.set(index.get(), false);
    }

    fn mark_delivered(&mut self, index: OrderIdx) {
        self.delivered.insert(index.get());
        self.delivered_count += 1;
    }

    fn unmark_delivered(&mut self, index: OrderIdx) {
        self.delivered.set(index.get(), false);
        self.delivered_count -= 1;
    }
}

/// Best complete plan found so far. Starts infinite so the first complete
/// sequence always wins; improvement is strict, so among equal-cost optima
/// the first one found is kept.
struct BestPlan {
    total_minutes: f64,
    steps: Vec<Command>,
}

impl<'a, C: TravelCost> BranchAndBound<'a, C> {
    pub fn new(problem: &'a DeliveryProblem, travel: C) -> Self {
        Self { problem, travel }
    }

    pub fn plan(&self) -> Result<PlanResult, PlanError> {
        if self.problem.order_count() == 0 {
            return Ok(PlanResult::empty());
        }

        debug!(
            orders = self.problem.order_count(),
            "starting branch-and-bound search"
        );

        let mut state = SearchState::new(self.problem.order_count());
        let mut best = BestPlan {
            total_minutes: f64::INFINITY,
            steps: Vec::new(),
        };

        self.dfs(
            0.0,
            self.problem.courier_start(),
            &mut state,
            &mut best,
        );

        if !best.total_minutes.is_finite() {
            return Err(PlanError::NoFeasiblePlan);
        }

        info!(
            total_minutes = best.total_minutes,
            nodes = state.nodes,
            "search completed"
        );

        Ok(PlanResult::new(best.steps, best.total_minutes, state.nodes))
    }

    fn dfs(&self, time: f64, at: &Location, state: &mut SearchState, best: &mut BestPlan) {
        state.nodes += 1;

        if state.delivered_count == self.problem.order_count() {
            if time < best.total_minutes {
                best.total_minutes = time;
                best.steps = state.steps.clone();
            }
            return;
        }

        if self.lower_bound(time, at, state) >= best.total_minutes {
            return;
        }

        // Pick transitions first, then drop transitions, both in input
        // order. Changing this ordering changes which of several equal-cost
        // optima is returned.
        for (index, order) in self.problem.orders().iter().enumerate_idx() {
            if state.is_picked(index) {
                continue;
            }

            let travel_min = self.travel.time_minutes(at, order.pickup());
            let arrive = time + travel_min;
            let wait = (order.ready_time_min() - arrive).max(0.0);
            let depart = arrive + wait;

            let command = Command::pick(
                order.id(),
                at.clone(),
                order.pickup().clone(),
                travel_min,
                wait,
                arrive,
                depart,
            );

            state.mark_picked(index);
            state.steps.push(command);
            self.dfs(depart, order.pickup(), state, best);
            state.steps.pop();
            state.unmark_picked(index);
        }

        for (index, order) in self.problem.orders().iter().enumerate_idx() {
            if !state.is_picked(index) || state.is_delivered(index) {
                continue;
            }

            let travel_min = self.travel.time_minutes(at, order.dropoff());
            let arrive = time + travel_min;

            let command = Command::drop(
                order.id(),
                at.clone(),
                order.dropoff().clone(),
                travel_min,
                arrive,
            );

            state.mark_delivered(index);
            state.steps.push(command);
            self.dfs(arrive, order.dropoff(), state, best);
            state.steps.pop();
            state.unmark_delivered(index);
        }
    }

    /// `time` plus the travel to the nearest remaining required target: a
    /// pickup for an unpicked order or a drop-off for a picked-undelivered
    /// one. Any feasible completion must still visit at least that one
    /// target, and ready-time waiting only ever adds delay, so this never
    /// overestimates.
    fn lower_bound(&self, time: f64, at: &Location, state: &SearchState) -> f64 {
        let mut nearest = f64::INFINITY;

        for (index, order) in self.problem.orders().iter().enumerate_idx() {
            if !state.is_picked(index) {
                nearest = nearest.min(self.travel.time_minutes(at, order.pickup()));
            } else if !state.is_delivered(index) {
                nearest = nearest.min(self.travel.time_minutes(at, order.dropoff()));
            }
        }

        // A non-goal state always has at least one remaining target.
        time + nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::command::Action;
    use crate::problem::kmh::Kmh;
    use crate::test_utils::{bangalore_problem, problem_from_stops};
    use crate::travel::haversine::HaversineTravel;
    use crate::travel::travel_cost::FixedTravel;

    /// Exhaustively enumerates every precedence-respecting interleaving of
    /// pick/drop actions and returns the minimum makespan. No pruning, so
    /// only usable for small instances.
    fn brute_force_minimum<C: TravelCost>(problem: &DeliveryProblem, travel: &C) -> f64 {
        fn recurse<C: TravelCost>(
            problem: &DeliveryProblem,
            travel: &C,
            time: f64,
            at: &Location,
            picked: &mut Vec<bool>,
            delivered: &mut Vec<bool>,
            best: &mut f64,
        ) {
            if delivered.iter().all(|&done| done) {
                if time < *best {
                    *best = time;
                }
                return;
            }

            for (i, order) in problem.orders().iter().enumerate() {
                if !picked[i] {
                    let arrive = time + travel.time_minutes(at, order.pickup());
                    let depart = arrive.max(order.ready_time_min());
                    picked[i] = true;
                    recurse(problem, travel, depart, order.pickup(), picked, delivered, best);
                    picked[i] = false;
                } else if !delivered[i] {
                    let arrive = time + travel.time_minutes(at, order.dropoff());
                    delivered[i] = true;
                    recurse(problem, travel, arrive, order.dropoff(), picked, delivered, best);
                    delivered[i] = false;
                }
            }
        }

        let n = problem.order_count();
        let mut best = f64::INFINITY;
        recurse(
            problem,
            travel,
            0.0,
            problem.courier_start(),
            &mut vec![false; n],
            &mut vec![false; n],
            &mut best,
        );
        best
    }

    fn assert_plan_is_valid(problem: &DeliveryProblem, result: &PlanResult) {
        let n = problem.order_count();
        let steps = result.steps();
        assert_eq!(steps.len(), n * 2);

        let picks: Vec<_> = steps.iter().filter(|s| s.action() == Action::Pick).collect();
        let drops: Vec<_> = steps.iter().filter(|s| s.action() == Action::Drop).collect();
        assert_eq!(picks.len(), n);
        assert_eq!(drops.len(), n);

        for order in problem.orders() {
            let pick_pos = steps
                .iter()
                .position(|s| s.action() == Action::Pick && s.order_id() == order.id())
                .unwrap();
            let drop_pos = steps
                .iter()
                .position(|s| s.action() == Action::Drop && s.order_id() == order.id())
                .unwrap();
            assert!(pick_pos < drop_pos, "order {} dropped before pick", order.id());
        }

        let last = steps.last().unwrap();
        assert_eq!(last.action(), Action::Drop);
        assert!((last.depart_time() - result.total_minutes()).abs() < 1e-9);

        for step in steps {
            assert!(step.travel_min() >= 0.0);
            assert!(step.wait_min() >= 0.0);
            match step.action() {
                Action::Pick => {
                    assert!(
                        (step.depart_time() - (step.arrive_time() + step.wait_min())).abs() < 1e-9
                    );
                }
                Action::Drop => {
                    assert_eq!(step.depart_time(), step.arrive_time());
                    assert_eq!(step.wait_min(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_zero_orders_is_trivially_done() {
        let problem = problem_from_stops(&[]);
        let search = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)));

        let result = search.plan().unwrap();

        assert!(result.steps().is_empty());
        assert_eq!(result.total_minutes(), 0.0);
    }

    #[test]
    fn test_zero_orders_succeeds_even_when_stalled() {
        let problem = problem_from_stops(&[]);
        let search = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(0.0)));

        let result = search.plan().unwrap();
        assert_eq!(result.total_minutes(), 0.0);
    }

    #[test]
    fn test_unreachable_orders_are_reported_infeasible() {
        let problem = bangalore_problem();
        let search = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(0.0)));

        assert!(matches!(search.plan(), Err(PlanError::NoFeasiblePlan)));
    }

    #[test]
    fn test_single_order_waits_for_ready_time() {
        // One order whose food is ready long after the courier can arrive.
        let problem = problem_from_stops(&[(12.9355, 77.6105, 30.0, 12.936, 77.611)]);
        let search = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)));

        let result = search.plan().unwrap();
        assert_plan_is_valid(&problem, &result);

        let pick = &result.steps()[0];
        assert_eq!(pick.action(), Action::Pick);
        assert!(pick.wait_min() > 0.0);
        assert!(
            (pick.wait_min() - (30.0 - pick.arrive_time())).abs() < 1e-9,
            "wait must be ready - arrive"
        );
        assert_eq!(pick.notes(), crate::planner::command::NOTE_WAITED);
    }

    #[test]
    fn test_bangalore_example_matches_brute_force() {
        let problem = bangalore_problem();
        let travel = HaversineTravel::new(Kmh::new(20.0));

        let result = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)))
            .plan()
            .unwrap();

        assert_plan_is_valid(&problem, &result);
        let oracle = brute_force_minimum(&problem, &travel);
        assert!((result.total_minutes() - oracle).abs() < 1e-9);

        // Each leg's travel time is exactly the haversine minutes between
        // its endpoints at the given speed.
        for step in result.steps() {
            let expected = travel.time_minutes(step.from(), step.to());
            assert!((step.travel_min() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_three_orders_match_brute_force() {
        let problem = problem_from_stops(&[
            (12.94, 77.62, 12.0, 12.945, 77.625),
            (12.93, 77.60, 8.0, 12.925, 77.605),
            (12.95, 77.59, 3.0, 12.955, 77.615),
        ]);
        let travel = HaversineTravel::new(Kmh::new(20.0));

        let result = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)))
            .plan()
            .unwrap();

        assert_plan_is_valid(&problem, &result);
        let oracle = brute_force_minimum(&problem, &travel);
        assert!((result.total_minutes() - oracle).abs() < 1e-9);
    }

    #[test]
    fn test_four_orders_match_brute_force() {
        let problem = problem_from_stops(&[
            (12.94, 77.62, 12.0, 12.945, 77.625),
            (12.93, 77.60, 8.0, 12.925, 77.605),
            (12.95, 77.59, 3.0, 12.955, 77.615),
            (12.92, 77.63, 20.0, 12.915, 77.635),
        ]);
        let travel = HaversineTravel::new(Kmh::new(25.0));

        let result = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(25.0)))
            .plan()
            .unwrap();

        assert_plan_is_valid(&problem, &result);
        let oracle = brute_force_minimum(&problem, &travel);
        assert!((result.total_minutes() - oracle).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_endpoints_still_require_precedence() {
        // Restaurant and consumer share coordinates; travel between them is
        // zero but the pick must still come first.
        let problem = problem_from_stops(&[(12.94, 77.62, 0.0, 12.94, 77.62)]);
        let search = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)));

        let result = search.plan().unwrap();
        assert_plan_is_valid(&problem, &result);
        assert_eq!(result.steps()[0].action(), Action::Pick);
        assert_eq!(result.steps()[1].action(), Action::Drop);
        assert_eq!(result.steps()[1].travel_min(), 0.0);
    }

    #[test]
    fn test_determinism() {
        let problem = bangalore_problem();

        let first = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)))
            .plan()
            .unwrap();
        let second = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)))
            .plan()
            .unwrap();

        assert_eq!(first.total_minutes(), second.total_minutes());
        assert_eq!(first.steps().len(), second.steps().len());
        for (a, b) in first.steps().iter().zip(second.steps()) {
            assert_eq!(a.action(), b.action());
            assert_eq!(a.order_id(), b.order_id());
            assert_eq!(a.arrive_time(), b.arrive_time());
            assert_eq!(a.depart_time(), b.depart_time());
        }
    }

    #[test]
    fn test_constant_cost_model() {
        // With every leg costing 1 minute and no ready-time pressure the
        // optimum is simply 2N legs.
        let problem = problem_from_stops(&[
            (12.94, 77.62, 0.0, 12.945, 77.625),
            (12.93, 77.60, 0.0, 12.925, 77.605),
        ]);
        let search = BranchAndBound::new(&problem, FixedTravel(1.0));

        let result = search.plan().unwrap();
        assert!((result.total_minutes() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_nodes_explored_is_reported() {
        let problem = bangalore_problem();
        let search = BranchAndBound::new(&problem, HaversineTravel::new(Kmh::new(20.0)));

        let result = search.plan().unwrap();
        assert!(result.nodes_explored() > 0);
    }
}
