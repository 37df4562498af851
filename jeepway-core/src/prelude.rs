pub use crate::Error;

// Re-export key components
pub use crate::matching::{
    DEFAULT_THRESHOLD_METERS, RouteProximityMatcher, find_routes_near_destination,
};
pub use crate::model::{Destination, RouteFeature, RouteMatch, RouteNetwork};

// Distance primitives
pub use crate::geometry::{
    EARTH_RADIUS_METERS, point_to_line_string_distance, point_to_multi_line_string_distance,
    point_to_segment_distance,
};
