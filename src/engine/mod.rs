pub mod footprint;
pub mod presets;
