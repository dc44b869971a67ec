use crate::geo::haversine_km;
use crate::models::location::Coordinate;
use crate::models::travel::TravelMode;
use crate::models::trip::{ImpactEquivalents, Recommendation, TripResult};

const GRAMS_PER_KG: f64 = 1_000.0;

const WALKABLE_FROM_DRIVING_KM: f64 = 2.0;
const WALKABLE_FROM_TRANSIT_KM: f64 = 3.0;

const GRAMS_PER_TREE_YEAR: f64 = 22_000.0;
const GRAMS_PER_LED_BULB_HOUR: f64 = 10.0;
const GRAMS_PER_PHONE_CHARGE: f64 = 8.3;

pub fn plan_trip(start: &Coordinate, end: &Coordinate, mode: TravelMode) -> TripResult {
    estimate_footprint(haversine_km(start, end), mode)
}

/// Estimates for a free-form mode string. Unknown modes are charged at the
/// driving factor and score but receive no recommendations. The flag is
/// `true` when that fallback was taken.
pub fn estimate_requested(distance_km: f64, requested_mode: &str) -> (TripResult, bool) {
    let (mode, fell_back) = TravelMode::resolve(requested_mode);
    let mut result = estimate_footprint(distance_km, mode);

    if fell_back {
        result.recommendations.clear();
        result.requested_mode = Some(requested_mode.to_string());
    }

    (result, fell_back)
}

pub fn plan_requested(
    start: &Coordinate,
    end: &Coordinate,
    requested_mode: &str,
) -> (TripResult, bool) {
    estimate_requested(haversine_km(start, end), requested_mode)
}

pub fn estimate_footprint(distance_km: f64, mode: TravelMode) -> TripResult {
    TripResult {
        distance_km,
        carbon_footprint_grams: carbon_grams(distance_km, mode),
        green_points: mode.green_points(),
        travel_mode: mode,
        recommendations: recommendations_for(mode, distance_km)
            .into_iter()
            .map(|rec| rec.message().to_string())
            .collect(),
        requested_mode: None,
    }
}

pub fn carbon_grams(distance_km: f64, mode: TravelMode) -> f64 {
    distance_km * mode.emission_factor_kg_per_km() * GRAMS_PER_KG
}

pub fn recommendations_for(mode: TravelMode, distance_km: f64) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    match mode {
        TravelMode::Driving => {
            recommendations.push(Recommendation::SwitchToTransit);
            recommendations.push(Recommendation::SwitchToBicycle);
            if distance_km < WALKABLE_FROM_DRIVING_KM {
                recommendations.push(Recommendation::SwitchToWalking);
            }
        }
        TravelMode::Transit => {
            recommendations.push(Recommendation::BicycleIsGreener);
            if distance_km < WALKABLE_FROM_TRANSIT_KM {
                recommendations.push(Recommendation::SwitchToWalking);
            }
        }
        TravelMode::Bicycling => recommendations.push(Recommendation::PraiseBicycling),
        TravelMode::Walking => recommendations.push(Recommendation::PraiseWalking),
        TravelMode::Motorcycle => {}
    }

    recommendations
}

pub fn impact_equivalents(carbon_grams: f64) -> ImpactEquivalents {
    ImpactEquivalents {
        tree_years: carbon_grams / GRAMS_PER_TREE_YEAR,
        led_bulb_hours: carbon_grams / GRAMS_PER_LED_BULB_HOUR,
        phone_charges: carbon_grams / GRAMS_PER_PHONE_CHARGE,
    }
}
