pub mod location;
pub mod travel;
pub mod trip;
