use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;

use crate::engine::presets::find_location;
use crate::error::AppError;
use crate::models::location::Location;
use crate::models::travel::TravelMode;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/locations", get(list_locations))
        .route("/locations/:name", get(get_location))
        .route("/travel-modes", get(list_travel_modes))
}

#[derive(Serialize)]
pub struct TravelModeInfo {
    pub mode: TravelMode,
    pub label: &'static str,
    pub emission_factor_kg_per_km: f64,
    pub green_points: u8,
}

async fn list_locations(State(state): State<Arc<AppState>>) -> Json<Vec<Location>> {
    Json(state.locations.clone())
}

async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Location>, AppError> {
    let location = find_location(&state.locations, &name)
        .ok_or_else(|| AppError::NotFound(format!("location {name} not found")))?;

    Ok(Json(location.clone()))
}

async fn list_travel_modes() -> Json<Vec<TravelModeInfo>> {
    let modes = TravelMode::ALL
        .into_iter()
        .map(|mode| TravelModeInfo {
            mode,
            label: mode.label(),
            emission_factor_kg_per_km: mode.emission_factor_kg_per_km(),
            green_points: mode.green_points(),
        })
        .collect();

    Json(modes)
}
