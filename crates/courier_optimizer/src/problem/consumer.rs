use crate::problem::location::Location;

/// A drop-off point.
#[derive(Debug, Clone)]
pub struct Consumer {
    id: String,
    location: Location,
}

impl Consumer {
    pub fn new(id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}
