use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::footprint::{estimate_requested, impact_equivalents, plan_requested};
use crate::engine::presets::resolve_location;
use crate::error::AppError;
use crate::geo::{haversine_km, MAX_DISTANCE_KM};
use crate::models::location::{Coordinate, Location};
use crate::models::travel::TravelMode;
use crate::models::trip::{ImpactEquivalents, TripResult};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/distance", post(distance))
        .route("/footprint", post(footprint))
        .route("/footprint/estimate", post(estimate))
}

/// Either an explicit point or text naming a preset / holding `"lat, lng"`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum LocationInput {
    Point(Coordinate),
    Text(String),
}

impl LocationInput {
    fn resolve(self, state: &AppState) -> Result<Location, AppError> {
        match self {
            LocationInput::Point(point) => {
                Coordinate::new(point.lat, point.lng).map(Location::unnamed)
            }
            LocationInput::Text(text) => resolve_location(&state.locations, &text),
        }
    }
}

#[derive(Deserialize)]
pub struct DistanceRequest {
    pub start: LocationInput,
    pub end: LocationInput,
}

#[derive(Serialize)]
pub struct DistanceResponse {
    pub start: Location,
    pub end: Location,
    pub distance_km: f64,
}

#[derive(Deserialize)]
pub struct FootprintRequest {
    pub start: LocationInput,
    pub end: LocationInput,
    #[serde(default = "default_travel_mode")]
    pub travel_mode: String,
}

#[derive(Deserialize)]
pub struct EstimateRequest {
    pub distance_km: f64,
    #[serde(default = "default_travel_mode")]
    pub travel_mode: String,
}

#[derive(Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub start: Location,
    pub end: Location,
    pub result: TripResult,
    pub impact: ImpactEquivalents,
    pub calculated_at: DateTime<Utc>,
}

fn default_travel_mode() -> String {
    TravelMode::Driving.as_str().to_string()
}

fn note_fallback(state: &AppState, raw: &str, fell_back: bool) {
    if fell_back {
        warn!(requested = raw, "unknown travel mode; charging as driving");
        state.metrics.mode_fallbacks_total.inc();
    }
}

async fn distance(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, AppError> {
    let start = payload.start.resolve(&state)?;
    let end = payload.end.resolve(&state)?;
    let distance_km = haversine_km(&start.coordinate, &end.coordinate);

    debug!(
        from = %start.name,
        to = %end.name,
        distance_km,
        "distance calculated"
    );

    Ok(Json(DistanceResponse {
        start,
        end,
        distance_km,
    }))
}

async fn footprint(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FootprintRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let start = payload.start.resolve(&state)?;
    let end = payload.end.resolve(&state)?;
    let (result, fell_back) =
        plan_requested(&start.coordinate, &end.coordinate, &payload.travel_mode);
    note_fallback(&state, &payload.travel_mode, fell_back);
    state.metrics.record_trip(&result);

    let response = TripResponse {
        id: Uuid::new_v4(),
        impact: impact_equivalents(result.carbon_footprint_grams),
        start,
        end,
        result,
        calculated_at: Utc::now(),
    };

    info!(
        trip_id = %response.id,
        from = %response.start.name,
        to = %response.end.name,
        mode = %response.result.travel_mode,
        distance_km = response.result.distance_km,
        carbon_grams = response.result.carbon_footprint_grams,
        "footprint calculated"
    );

    Ok(Json(response))
}

async fn estimate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EstimateRequest>,
) -> Result<Json<TripResult>, AppError> {
    if !(0.0..=MAX_DISTANCE_KM).contains(&payload.distance_km) {
        return Err(AppError::BadRequest(format!(
            "distance_km must be between 0 and {MAX_DISTANCE_KM:.1}"
        )));
    }

    let (result, fell_back) = estimate_requested(payload.distance_km, &payload.travel_mode);
    note_fallback(&state, &payload.travel_mode, fell_back);
    state.metrics.record_trip(&result);

    Ok(Json(result))
}
