use thiserror::Error;

use crate::problem::delivery_problem::ProblemError;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("unknown planner kind: {0}")]
    UnknownPlanner(String),

    #[error("no feasible plan: average speed {0} km/h makes every order unreachable")]
    InfeasibleSpeed(f64),

    #[error("no feasible plan: some order cannot be reached")]
    NoFeasiblePlan,

    #[error(transparent)]
    Problem(#[from] ProblemError),
}
