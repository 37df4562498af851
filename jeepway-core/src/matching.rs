//! Ranking of routes by their distance to a destination.

use geojson::FeatureCollection;
use hashbrown::{HashMap, hash_map::Entry};
use log::debug;
use rayon::prelude::*;

use crate::geometry::point_to_multi_line_string_distance;
use crate::{Destination, Error, RouteMatch, RouteNetwork};

/// Default search radius around a destination
pub const DEFAULT_THRESHOLD_METERS: f64 = 500.0;

/// Finds the routes passing within a distance threshold of a destination.
///
/// Results hold at most one match per route ref (the closest), sorted by
/// ascending distance. Routes at equal distance keep dataset order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteProximityMatcher {
    threshold_meters: f64,
}

impl Default for RouteProximityMatcher {
    fn default() -> Self {
        Self {
            threshold_meters: DEFAULT_THRESHOLD_METERS,
        }
    }
}

impl RouteProximityMatcher {
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] unless the threshold is finite and
    /// non-negative.
    pub fn new(threshold_meters: f64) -> Result<Self, Error> {
        if threshold_meters.is_finite() && threshold_meters >= 0.0 {
            Ok(Self { threshold_meters })
        } else {
            Err(Error::InvalidThreshold(threshold_meters))
        }
    }

    pub fn threshold_meters(&self) -> f64 {
        self.threshold_meters
    }

    pub fn find_nearby_routes(
        &self,
        network: &RouteNetwork,
        destination: Destination,
    ) -> Vec<RouteMatch> {
        let point = destination.as_point();

        // ref -> position in `matches`, so replacements keep first-seen order
        let mut best_by_ref: HashMap<&str, usize> = HashMap::new();
        let mut matches: Vec<RouteMatch> = Vec::new();

        for route in network.routes() {
            let (distance, nearest_part) = point_to_multi_line_string_distance(point, &route.parts);

            // Unrounded distance decides inclusion
            if !distance.is_finite() || distance > self.threshold_meters {
                continue;
            }

            let candidate = route.to_match(distance, nearest_part);

            match best_by_ref.entry(route.route_ref.as_str()) {
                Entry::Occupied(entry) => {
                    let existing = &mut matches[*entry.get()];
                    if candidate.distance_meters < existing.distance_meters {
                        *existing = candidate;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(matches.len());
                    matches.push(candidate);
                }
            }
        }

        // Stable sort keeps ties deterministic
        matches.sort_by_key(|m| m.distance_meters);

        debug!(
            "Found {} routes within {} m of {destination}",
            matches.len(),
            self.threshold_meters
        );

        matches
    }

    /// Matches several independent destinations in parallel.
    ///
    /// Results are returned in the same order as `destinations`.
    pub fn find_nearby_routes_bulk(
        &self,
        network: &RouteNetwork,
        destinations: &[Destination],
    ) -> Vec<Vec<RouteMatch>> {
        destinations
            .par_iter()
            .map(|destination| self.find_nearby_routes(network, *destination))
            .collect()
    }
}

/// Ranks the routes of a GeoJSON `FeatureCollection` by distance to `destination`.
///
/// Features without a route ref or without line geometry are ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidThreshold`] if `threshold_meters` is negative or
/// not finite.
pub fn find_routes_near_destination(
    collection: &FeatureCollection,
    destination: Destination,
    threshold_meters: f64,
) -> Result<Vec<RouteMatch>, Error> {
    let matcher = RouteProximityMatcher::new(threshold_meters)?;
    let network = RouteNetwork::from_feature_collection(collection);
    Ok(matcher.find_nearby_routes(&network, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(
            RouteProximityMatcher::default().threshold_meters(),
            DEFAULT_THRESHOLD_METERS
        );
    }

    #[test]
    fn test_threshold_validation() {
        assert!(RouteProximityMatcher::new(0.0).is_ok());
        assert!(RouteProximityMatcher::new(1200.0).is_ok());
        assert!(matches!(
            RouteProximityMatcher::new(-1.0),
            Err(Error::InvalidThreshold(_))
        ));
        assert!(RouteProximityMatcher::new(f64::NAN).is_err());
        assert!(RouteProximityMatcher::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_network() {
        let destination = Destination::new(14.5640135, 120.9864363).unwrap();
        let matches =
            RouteProximityMatcher::default().find_nearby_routes(&RouteNetwork::default(), destination);
        assert!(matches.is_empty());
    }
}
