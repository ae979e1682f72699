use crate::planner::command::Command;

/// The optimal route: one pick and one drop per order, ending on a drop
/// whose depart time equals `total_minutes`.
#[derive(Debug)]
pub struct PlanResult {
    steps: Vec<Command>,
    total_minutes: f64,
    nodes_explored: u64,
}

impl PlanResult {
    pub(crate) fn new(steps: Vec<Command>, total_minutes: f64, nodes_explored: u64) -> Self {
        Self {
            steps,
            total_minutes,
            nodes_explored,
        }
    }

    /// The trivial plan for an empty order set.
    pub(crate) fn empty() -> Self {
        Self {
            steps: Vec::new(),
            total_minutes: 0.0,
            nodes_explored: 0,
        }
    }

    pub fn steps(&self) -> &[Command] {
        &self.steps
    }

    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }
}
