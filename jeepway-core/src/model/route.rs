//! Transit route features extracted from GeoJSON

use geo::{Coord, LineString, MultiLineString};
use geojson::{Feature, Geometry, GeometryValue, Position, feature::Id};
use log::trace;
use serde_json::Value as JsonValue;

use super::RouteMatch;

/// A named transit route path
///
/// Single `LineString` geometries are stored as a one-part
/// `MultiLineString` so that distance computation has one code path.
#[derive(Debug, Clone)]
pub struct RouteFeature {
    /// Route code shown to commuters, used as the deduplication key
    pub route_ref: String,
    /// Display name
    pub name: Option<String>,
    /// Upstream identifier (`@id` property or feature id)
    pub external_id: Option<JsonValue>,
    /// Polyline parts in `[lon, lat]` order
    pub parts: MultiLineString<f64>,
    /// Source geometry, returned untouched for display
    pub geometry: Geometry,
    is_multi_part: bool,
}

impl RouteFeature {
    /// Extracts a route from a GeoJSON feature.
    ///
    /// Returns `None` for features that cannot be offered to a commuter:
    /// missing geometry, geometry other than `LineString`/`MultiLineString`,
    /// malformed coordinates, or a missing/empty `ref` property.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        let geometry = feature.geometry.as_ref()?;

        let (parts, is_multi_part) = match &geometry.value {
            GeometryValue::LineString { coordinates } => {
                (MultiLineString::new(vec![line_string(coordinates)?]), false)
            }
            GeometryValue::MultiLineString { coordinates } => {
                let lines = coordinates
                    .iter()
                    .map(|line| line_string(line))
                    .collect::<Option<Vec<_>>>()?;
                (MultiLineString::new(lines), true)
            }
            _ => return None,
        };

        let Some(route_ref) = feature.property("ref").and_then(route_ref_from_json) else {
            trace!("Skipping feature without a route ref");
            return None;
        };

        let name = feature
            .property("name")
            .and_then(JsonValue::as_str)
            .map(str::to_owned);

        let external_id = feature
            .property("@id")
            .filter(|id| !id.is_null())
            .cloned()
            .or_else(|| feature.id.as_ref().map(id_to_json));

        Some(Self {
            route_ref,
            name,
            external_id,
            parts,
            geometry: geometry.clone(),
            is_multi_part,
        })
    }

    pub fn is_multi_part(&self) -> bool {
        self.is_multi_part
    }

    /// Builds the match record for this route at the given distance.
    ///
    /// `nearest_part` is only kept for multi-part geometries.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn to_match(&self, distance_meters: f64, nearest_part: Option<usize>) -> RouteMatch {
        RouteMatch {
            route_ref: self.route_ref.clone(),
            name: self.name.clone(),
            distance_meters: distance_meters.round() as u64,
            external_id: self.external_id.clone(),
            geometry: self.geometry.clone(),
            nearest_part: nearest_part.filter(|_| self.is_multi_part),
        }
    }
}

/// Converts GeoJSON positions, rejecting any with fewer than two ordinates
fn line_string(positions: &[Position]) -> Option<LineString<f64>> {
    positions
        .iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Some(Coord { x: *x, y: *y }),
            short => {
                trace!("Skipping feature with malformed position {short:?}");
                None
            }
        })
        .collect::<Option<Vec<_>>>()
        .map(LineString::new)
}

/// Route refs are usually strings, but some datasets tag numeric codes.
///
/// Numbers are keyed by their JSON text, so `12` and `"12"` are the same
/// route and `12.0` stays `"12.0"`. Empty strings and zero count as absent.
/// Booleans, arrays and objects are not route codes and are rejected, even
/// `true`.
fn route_ref_from_json(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn id_to_json(id: &Id) -> JsonValue {
    match id {
        Id::String(s) => JsonValue::String(s.clone()),
        Id::Number(n) => JsonValue::Number(n.clone()),
    }
}
