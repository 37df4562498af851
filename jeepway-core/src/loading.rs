//! Builds a [`RouteNetwork`] from GeoJSON route data.
//!
//! Route datasets are heterogeneously tagged, so individual features that
//! cannot be used (unparseable, unsupported geometry, no route ref) are
//! dropped and counted rather than failing the load. Only a top-level
//! document that is not a `FeatureCollection` is an error.

use std::fs;
use std::path::Path;

use geojson::{Feature, FeatureCollection};
use log::{debug, info, trace};
use serde_json::Value as JsonValue;

use crate::{Error, RouteFeature, RouteNetwork};

impl RouteNetwork {
    pub fn from_feature_collection(collection: &FeatureCollection) -> Self {
        Self::from_features(collection.features.iter(), collection.features.len())
    }

    fn from_features<'a>(features: impl Iterator<Item = &'a Feature>, total: usize) -> Self {
        let routes: Vec<RouteFeature> = features.filter_map(RouteFeature::from_feature).collect();
        let skipped = total - routes.len();

        if skipped > 0 {
            debug!("Skipped {skipped} features without a usable route ref or line geometry");
        }

        Self { routes, skipped }
    }

    /// Parses a GeoJSON document holding a `FeatureCollection`
    ///
    /// Features are decoded one at a time; a feature that is not valid
    /// GeoJSON (for example an unknown geometry type) is skipped. A missing
    /// or null `features` member is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON, is not a `FeatureCollection`,
    /// or its `features` member is not an array.
    pub fn from_geojson_str(geojson: &str) -> Result<Self, Error> {
        let document: JsonValue =
            serde_json::from_str(geojson).map_err(|e| Error::GeoJsonError(e.to_string()))?;

        let JsonValue::Object(mut document) = document else {
            return Err(Error::InvalidData(
                "expected a FeatureCollection object".to_string(),
            ));
        };

        match document.get("type").and_then(JsonValue::as_str) {
            Some("FeatureCollection") => {}
            Some(other) => {
                return Err(Error::InvalidData(format!(
                    "expected a FeatureCollection but got '{other}'"
                )));
            }
            None => {
                return Err(Error::InvalidData(
                    "expected a FeatureCollection but the document has no type".to_string(),
                ));
            }
        }

        let raw_features = match document.remove("features") {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(features)) => features,
            Some(_) => {
                return Err(Error::InvalidData(
                    "FeatureCollection 'features' must be an array".to_string(),
                ));
            }
        };

        let total = raw_features.len();
        let features: Vec<Feature> = raw_features
            .into_iter()
            .filter_map(|raw| {
                serde_json::from_value::<Feature>(raw)
                    .inspect_err(|e| trace!("Skipping invalid feature: {e}"))
                    .ok()
            })
            .collect();

        Ok(Self::from_features(features.iter(), total))
    }

    /// Loads route data from a GeoJSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a
    /// `FeatureCollection`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read route data '{}': {}", path.display(), e),
            )
        })?;

        let network = Self::from_geojson_str(&contents)?;
        info!(
            "Loaded {} routes from {} ({} features skipped)",
            network.len(),
            path.display(),
            network.skipped()
        );

        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[120.98, 14.56], [120.99, 14.57]] },
                "properties": { "ref": "R1", "name": "Route one" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[120.98, 14.56], [120.99, 14.57]] },
                "properties": { "name": "No ref" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [120.98, 14.56] },
                "properties": { "ref": "P1" }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[121.0, 14.6], [121.01, 14.61]]]
                },
                "properties": { "ref": "t2" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[121.1, 14.7], [121.2, 14.8]] },
                "properties": { "ref": "R1" }
            }
        ]
    }"#;

    #[test]
    fn test_from_geojson_str_skips_unusable_features() {
        let network = RouteNetwork::from_geojson_str(COLLECTION).unwrap();
        assert_eq!(network.len(), 3);
        assert_eq!(network.skipped(), 2);
        assert_eq!(network.route_refs(), vec!["R1", "t2"]);
    }

    #[test]
    fn test_empty_collection() {
        let network =
            RouteNetwork::from_geojson_str(r#"{"type": "FeatureCollection", "features": []}"#)
                .unwrap();
        assert!(network.is_empty());
        assert_eq!(network.skipped(), 0);
    }

    #[test]
    fn test_absent_features_is_empty() {
        for doc in [
            r#"{"type": "FeatureCollection"}"#,
            r#"{"type": "FeatureCollection", "features": null}"#,
        ] {
            let network = RouteNetwork::from_geojson_str(doc).unwrap();
            assert!(network.is_empty());
            assert_eq!(network.skipped(), 0);
        }
    }

    #[test]
    fn test_invalid_features_are_skipped_individually() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Foo", "coordinates": [[120.98, 14.56], [120.99, 14.57]] },
                    "properties": { "ref": "F1" }
                },
                {
                    "type": "Feature",
                    "geometry": { "type": "LineString", "coordinates": [[1], [2, 3]] },
                    "properties": { "ref": "S1" }
                },
                "not a feature",
                {
                    "type": "Feature",
                    "geometry": { "type": "LineString", "coordinates": [[120.98, 14.56], [120.99, 14.57]] },
                    "properties": { "ref": "R1" }
                }
            ]
        }"#;

        let network = RouteNetwork::from_geojson_str(doc).unwrap();
        assert_eq!(network.route_refs(), vec!["R1"]);
        assert_eq!(network.skipped(), 3);
    }

    #[test]
    fn test_rejects_non_collection_documents() {
        let feature = r#"{
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": [[120.98, 14.56], [120.99, 14.57]] },
            "properties": { "ref": "R1" }
        }"#;
        assert!(matches!(
            RouteNetwork::from_geojson_str(feature),
            Err(Error::InvalidData(_))
        ));

        assert!(matches!(
            RouteNetwork::from_geojson_str("[1, 2, 3]"),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            RouteNetwork::from_geojson_str(r#"{"type": "FeatureCollection", "features": {}}"#),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            RouteNetwork::from_geojson_str("not json"),
            Err(Error::GeoJsonError(_))
        ));
    }

    #[test]
    fn test_find_route_geometry_is_case_insensitive() {
        let network = RouteNetwork::from_geojson_str(COLLECTION).unwrap();

        let geometry = network.find_route_geometry("T2").unwrap();
        assert_eq!(geometry, &network.routes()[1].geometry);

        // First route wins when refs repeat
        let first = network.find_route_geometry("r1").unwrap();
        assert_eq!(first, &network.routes()[0].geometry);

        assert!(network.find_route_geometry("X9").is_none());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = RouteNetwork::from_path("/nonexistent/jeepney_routes.geojson").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
        assert!(err.to_string().contains("jeepney_routes.geojson"));
    }
}
