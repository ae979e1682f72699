use std::str::FromStr;

use tracing::debug;

use crate::planner::{error::PlanError, plan::PlanResult, search::BranchAndBound};
use crate::problem::{delivery_problem::DeliveryProblem, kmh::Kmh};
use crate::travel::haversine::HaversineTravel;

/// Which optimizer to run. Only the exact branch-and-bound exists today;
/// the selector keeps the dispatch point explicit for future heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlannerKind {
    #[default]
    Exact,
}

impl FromStr for PlannerKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(PlannerKind::Exact),
            other => Err(PlanError::UnknownPlanner(other.to_owned())),
        }
    }
}

/// Plans the route with the haversine travel model at `speed`.
///
/// A non-positive speed with at least one order is rejected up front: every
/// pickup would be unreachable and the search could only return a silently
/// infinite plan. With zero orders the trivial empty plan is still valid.
pub fn plan(
    kind: PlannerKind,
    problem: &DeliveryProblem,
    speed: Kmh,
) -> Result<PlanResult, PlanError> {
    if problem.order_count() > 0 && !speed.is_positive() {
        return Err(PlanError::InfeasibleSpeed(speed.value()));
    }

    debug!(
        orders = problem.order_count(),
        speed_kmph = speed.value(),
        "dispatching planner"
    );

    match kind {
        PlannerKind::Exact => BranchAndBound::new(problem, HaversineTravel::new(speed)).plan(),
    }
}
