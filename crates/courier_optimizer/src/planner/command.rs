use serde::Serialize;

use crate::problem::location::Location;

pub const NOTE_DELIVERED: &str = "Delivered";
pub const NOTE_WAITED: &str = "Arrived early, waited";
pub const NOTE_ON_TIME: &str = "Arrived on/after ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Pick,
    Drop,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Pick => write!(f, "PICK"),
            Action::Drop => write!(f, "DROP"),
        }
    }
}

/// One leg of the route, fully timed. Derived by the planner, never
/// user-supplied.
#[derive(Debug, Clone)]
pub struct Command {
    action: Action,
    order_id: String,
    from: Location,
    to: Location,
    travel_min: f64,
    wait_min: f64,
    arrive_time: f64,
    depart_time: f64,
    notes: &'static str,
}

impl Command {
    pub fn pick(
        order_id: impl Into<String>,
        from: Location,
        to: Location,
        travel_min: f64,
        wait_min: f64,
        arrive_time: f64,
        depart_time: f64,
    ) -> Self {
        Self {
            action: Action::Pick,
            order_id: order_id.into(),
            from,
            to,
            travel_min,
            wait_min,
            arrive_time,
            depart_time,
            notes: if wait_min > 0.0 {
                NOTE_WAITED
            } else {
                NOTE_ON_TIME
            },
        }
    }

    pub fn drop(
        order_id: impl Into<String>,
        from: Location,
        to: Location,
        travel_min: f64,
        arrive_time: f64,
    ) -> Self {
        Self {
            action: Action::Drop,
            order_id: order_id.into(),
            from,
            to,
            travel_min,
            wait_min: 0.0,
            arrive_time,
            // No wait is modeled on a drop.
            depart_time: arrive_time,
            notes: NOTE_DELIVERED,
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn from(&self) -> &Location {
        &self.from
    }

    pub fn to(&self) -> &Location {
        &self.to
    }

    pub fn travel_min(&self) -> f64 {
        self.travel_min
    }

    pub fn wait_min(&self) -> f64 {
        self.wait_min
    }

    pub fn arrive_time(&self) -> f64 {
        self.arrive_time
    }

    pub fn depart_time(&self) -> f64 {
        self.depart_time
    }

    pub fn notes(&self) -> &'static str {
        self.notes
    }
}
