use crate::error::AppError;
use crate::geo::parse_coordinate;
use crate::models::location::{Coordinate, Location};

const POPULAR_LOCATIONS: [(&str, f64, f64); 6] = [
    ("นิมมานเหมินทร์", 18.8022, 98.9525),
    ("ประตูท่าแพ", 18.7869, 98.9953),
    ("ตลาดวโรรส", 18.7906, 98.9920),
    ("ดอยสุเทพ", 18.8048, 98.9216),
    ("สนามบินเชียงใหม่", 18.7669, 98.9625),
    ("เซ็นทรัลเฟสติวัล", 18.8041, 98.9767),
];

pub fn popular_locations() -> Vec<Location> {
    POPULAR_LOCATIONS
        .iter()
        .map(|&(name, lat, lng)| Location {
            name: name.to_string(),
            coordinate: Coordinate { lat, lng },
        })
        .collect()
}

pub fn find_location<'a>(locations: &'a [Location], name: &str) -> Option<&'a Location> {
    let name = name.trim();
    locations.iter().find(|location| location.name == name)
}

/// Resolves user text to a location: a preset name wins, otherwise the text
/// must be a `"lat, lng"` pair.
pub fn resolve_location(locations: &[Location], text: &str) -> Result<Location, AppError> {
    if let Some(preset) = find_location(locations, text) {
        return Ok(preset.clone());
    }

    parse_coordinate(text).map(Location::unnamed)
}
