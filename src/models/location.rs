use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Builds a coordinate after checking it is finite and within
    /// [-90, 90] latitude and [-180, 180] longitude.
    pub fn new(lat: f64, lng: f64) -> Result<Self, AppError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(AppError::InvalidCoordinate(format!(
                "{lat}, {lng} is not finite"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {lng} outside [-180, 180]"
            )));
        }

        Ok(Self { lat, lng })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Location {
    /// A location without a preset name is labelled by its coordinate.
    pub fn unnamed(coordinate: Coordinate) -> Self {
        Self {
            name: coordinate.to_string(),
            coordinate,
        }
    }
}
