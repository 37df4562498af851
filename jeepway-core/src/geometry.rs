//! Distance primitives over WGS84 `[longitude, latitude]` coordinates.
//!
//! Point-to-segment distance projects the segment onto a local
//! equirectangular plane centred on the query point, finds the closest point
//! on the segment there (clamped to the endpoints), and measures the
//! haversine distance to it. The projection error is negligible for the
//! segment lengths found in city transit geometry (a few kilometres at most).

use geo::{Coord, Distance, Haversine, Line, LineString, MultiLineString, Point};

/// Mean Earth radius in meters, the sphere `Haversine` measures on
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Distance in meters from `point` to the closest point of `segment`
pub fn point_to_segment_distance(point: Point<f64>, segment: Line<f64>) -> f64 {
    let origin = point.0;
    let start = project(origin, segment.start);
    let end = project(origin, segment.end);

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;

    // Origin of the local plane is the query point itself
    let t = if len_sq > 0.0 {
        (-(start.x * dx + start.y * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let closest = Coord {
        x: segment.start.x + t * wrap_longitude(segment.end.x - segment.start.x),
        y: segment.start.y + t * (segment.end.y - segment.start.y),
    };

    Haversine.distance(point, Point(closest))
}

/// Minimum distance in meters from `point` to any segment of `line`.
///
/// A polyline with fewer than two coordinates has no segments and is
/// infinitely far away.
pub fn point_to_line_string_distance(point: Point<f64>, line: &LineString<f64>) -> f64 {
    line.lines()
        .map(|segment| point_to_segment_distance(point, segment))
        .fold(f64::INFINITY, f64::min)
}

/// Minimum distance in meters from `point` to any part of `lines`,
/// together with the index of the part that produced it.
///
/// Returns `(f64::INFINITY, None)` if no part has a usable segment.
pub fn point_to_multi_line_string_distance(
    point: Point<f64>,
    lines: &MultiLineString<f64>,
) -> (f64, Option<usize>) {
    let mut best = (f64::INFINITY, None);

    for (idx, line) in lines.iter().enumerate() {
        let distance = point_to_line_string_distance(point, line);
        if distance < best.0 {
            best = (distance, Some(idx));
        }
    }

    best
}

/// Project `coord` onto the equirectangular plane tangent at `origin`, in meters
fn project(origin: Coord<f64>, coord: Coord<f64>) -> Coord<f64> {
    let cos_lat = origin.y.to_radians().cos();
    Coord {
        x: wrap_longitude(coord.x - origin.x).to_radians() * cos_lat * EARTH_RADIUS_METERS,
        y: (coord.y - origin.y).to_radians() * EARTH_RADIUS_METERS,
    }
}

/// Normalize a longitude difference into [-180, 180]
fn wrap_longitude(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}
