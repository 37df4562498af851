use geojson::Geometry;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// A route found near a destination
///
/// Serializes as `{ ref, name, distance_m, osm_id, geometry }`; fields that
/// are absent on the source feature are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch {
    #[serde(rename = "ref")]
    pub route_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Distance from the destination to the nearest point of the route, rounded
    #[serde(rename = "distance_m")]
    pub distance_meters: u64,
    #[serde(rename = "osm_id", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<JsonValue>,
    pub geometry: Geometry,
    /// Index of the `MultiLineString` part closest to the destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_part: Option<usize>,
}
