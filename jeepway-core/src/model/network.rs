use super::RouteFeature;
use geojson::Geometry;
use hashbrown::HashSet;

/// The set of routes a destination is matched against, in dataset order
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    pub(crate) routes: Vec<RouteFeature>,
    /// Features that did not yield a usable route
    pub(crate) skipped: usize,
}

impl RouteNetwork {
    pub fn new(routes: Vec<RouteFeature>) -> Self {
        Self { routes, skipped: 0 }
    }

    pub fn routes(&self) -> &[RouteFeature] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Geometry of the first route whose ref matches `route_code`, ignoring case
    pub fn find_route_geometry(&self, route_code: &str) -> Option<&Geometry> {
        let wanted = route_code.to_lowercase();
        self.routes
            .iter()
            .find(|route| route.route_ref.to_lowercase() == wanted)
            .map(|route| &route.geometry)
    }

    /// Distinct route refs in first-seen order
    pub fn route_refs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.routes
            .iter()
            .map(|route| route.route_ref.as_str())
            .filter(|route_ref| seen.insert(*route_ref))
            .collect()
    }
}
