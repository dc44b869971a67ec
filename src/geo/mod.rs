use crate::error::AppError;
use crate::models::location::Coordinate;

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Longest great-circle distance `haversine_km` can return.
pub const MAX_DISTANCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

/// Great-circle distance in kilometres. Accepts any finite pair; the result is
/// symmetric and bounded by half the Earth's circumference.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    // Rounding can push h a hair past 1 for antipodal points.
    let haversine =
        (sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).sqrt());

    EARTH_RADIUS_KM * central_angle
}

/// Parses free text of the form `"lat, lng"`.
pub fn parse_coordinate(text: &str) -> Result<Coordinate, AppError> {
    let parts: Vec<&str> = text.split(',').collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(AppError::InvalidCoordinate(format!(
            "expected \"lat, lng\", got {text:?}"
        )));
    };

    let lat = parse_component(lat, "latitude")?;
    let lng = parse_component(lng, "longitude")?;

    Coordinate::new(lat, lng)
}

fn parse_component(raw: &str, what: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| AppError::InvalidCoordinate(format!("{what} {:?}: {err}", raw.trim())))
}
