pub mod model;
pub mod timefmt;

pub use model::{Coordinates, Location, LocationPatch, Route, RoutePayload};
pub use timefmt::{normalize, parse_timestamp};
