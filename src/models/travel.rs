use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walking,
    Bicycling,
    Transit,
    Motorcycle,
    Driving,
}

impl TravelMode {
    pub const ALL: [TravelMode; 5] = [
        TravelMode::Walking,
        TravelMode::Bicycling,
        TravelMode::Transit,
        TravelMode::Motorcycle,
        TravelMode::Driving,
    ];

    /// Kilograms of CO₂ emitted per kilometre travelled.
    pub fn emission_factor_kg_per_km(self) -> f64 {
        match self {
            TravelMode::Walking => 0.0,
            TravelMode::Bicycling => 0.02,
            TravelMode::Transit => 0.12,
            TravelMode::Motorcycle => 0.15,
            TravelMode::Driving => 0.21,
        }
    }

    pub fn green_points(self) -> u8 {
        match self {
            TravelMode::Walking => 100,
            TravelMode::Bicycling => 85,
            TravelMode::Transit => 60,
            TravelMode::Motorcycle => 40,
            TravelMode::Driving => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
            TravelMode::Motorcycle => "motorcycle",
            TravelMode::Driving => "driving",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Walking => "เดินเท้า",
            TravelMode::Bicycling => "จักรยาน",
            TravelMode::Transit => "รถสาธารณะ",
            TravelMode::Motorcycle => "รถจักรยานยนต์",
            TravelMode::Driving => "รถยนต์",
        }
    }

    /// Lenient lookup: anything that is not a known mode is treated as driving.
    /// The flag is `true` when the fallback was taken.
    pub fn resolve(raw: &str) -> (TravelMode, bool) {
        match raw.parse::<TravelMode>() {
            Ok(mode) => (mode, false),
            Err(_) => (TravelMode::Driving, true),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown travel mode: {s}, expected walking/bicycling/transit/motorcycle/driving"
                )
            })
    }
}
