use crate::engine::presets::popular_locations;
use crate::models::location::Location;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub locations: Vec<Location>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_locations(popular_locations())
    }

    pub fn with_locations(locations: Vec<Location>) -> Self {
        Self {
            locations,
            metrics: Metrics::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
