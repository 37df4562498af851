//! # Jeepway core
//!
//! Matches transit route geometries to a commuter's destination.
//!
//! Given a GeoJSON `FeatureCollection` of routes (`LineString` or
//! `MultiLineString` features tagged with a `ref` route code) and a
//! destination, [`RouteProximityMatcher`] returns the routes that pass
//! within a distance threshold, closest first, one entry per route ref.
//!
//! ```no_run
//! use jeepway_core::prelude::*;
//!
//! let network = RouteNetwork::from_path("data/jeepney_routes.geojson")?;
//! let destination = Destination::new(14.5640135, 120.9864363)?;
//!
//! for m in RouteProximityMatcher::default().find_nearby_routes(&network, destination) {
//!     println!("{} is {} m away", m.route_ref, m.distance_meters);
//! }
//! # Ok::<(), jeepway_core::Error>(())
//! ```

mod error;
pub mod geometry;
pub mod loading;
pub mod matching;
pub mod model;
pub mod prelude;

pub use error::Error;
pub use matching::{DEFAULT_THRESHOLD_METERS, RouteProximityMatcher, find_routes_near_destination};
pub use model::{Destination, RouteFeature, RouteMatch, RouteNetwork};
