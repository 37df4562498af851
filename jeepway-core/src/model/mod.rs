//! Data model for route proximity matching
//!
//! Contains the destination, route and match types shared by loading and
//! matching.

pub mod destination;
pub mod network;
pub mod route;
pub mod route_match;

pub use destination::Destination;
pub use network::RouteNetwork;
pub use route::RouteFeature;
pub use route_match::RouteMatch;
