use serde::Serialize;

use crate::planner::{
    command::{Action, Command},
    plan::PlanResult,
};
use crate::problem::location::Location;

/// The wire form of a computed plan.
#[derive(Serialize)]
pub struct PlanOutput {
    pub total_minutes: f64,
    pub steps: Vec<StepOutput>,
}

#[derive(Serialize)]
pub struct StepOutput {
    pub action: Action,
    pub order_id: String,
    pub from: LocationOutput,
    pub to: LocationOutput,
    pub travel_min: f64,
    pub wait_min: f64,
    pub arrive_time: f64,
    pub depart_time: f64,
    pub notes: String,
}

#[derive(Serialize)]
pub struct LocationOutput {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Location> for LocationOutput {
    fn from(location: &Location) -> Self {
        LocationOutput {
            name: location.name().to_owned(),
            lat: location.lat(),
            lon: location.lon(),
        }
    }
}

impl From<&Command> for StepOutput {
    fn from(command: &Command) -> Self {
        StepOutput {
            action: command.action(),
            order_id: command.order_id().to_owned(),
            from: command.from().into(),
            to: command.to().into(),
            travel_min: command.travel_min(),
            wait_min: command.wait_min(),
            arrive_time: command.arrive_time(),
            depart_time: command.depart_time(),
            notes: command.notes().to_owned(),
        }
    }
}

impl From<&PlanResult> for PlanOutput {
    fn from(result: &PlanResult) -> Self {
        PlanOutput {
            total_minutes: result.total_minutes(),
            steps: result.steps().iter().map(StepOutput::from).collect(),
        }
    }
}
