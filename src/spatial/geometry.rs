//! Planar geometry on the octet grid
//!
//! Angles are compass bearings in degrees: 0 = north, 90 = east, 180 = south,
//! 270 = west, measured clockwise. Coordinates are screen-style, so north is −y.
//! The proximity builder keys neighbors by these bearings, so the convention
//! must not change.

use geo::{Contains, LineString, Point, Polygon};

use crate::core::types::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Compass bearing of the vector `a -> b`, normalized to `[0, 360)`
///
/// Coincident points have bearing 0.
pub fn bearing(a: Vec2, b: Vec2) -> f64 {
    let east = b.x - a.x;
    let north = a.y - b.y;
    let mut angle = east.atan2(north).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

/// Point reached by walking `dist` from `p` along compass bearing `angle_deg`
pub fn offset(p: Vec2, angle_deg: f64, dist: f64) -> Vec2 {
    let rad = (-angle_deg).to_radians();
    Vec2::new(p.x - dist * rad.sin(), p.y - dist * rad.cos())
}

/// Check if two line segments intersect (proper intersection, not touching)
///
/// Segments that only share an endpoint do not intersect.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = cross_product_sign(b1, b2, a1);
    let d2 = cross_product_sign(b1, b2, a2);
    let d3 = cross_product_sign(a1, a2, b1);
    let d4 = cross_product_sign(a1, a2, b2);

    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

fn cross_product_sign(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Check if `p` lies inside the ring `ring` (implicitly closed)
///
/// Rings with fewer than three vertices contain nothing.
pub fn point_in_polygon(p: Vec2, ring: &[Vec2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    to_geo_polygon(ring).contains(&Point::new(p.x, p.y))
}

fn to_geo_polygon(ring: &[Vec2]) -> Polygon<f64> {
    let mut coords: Vec<(f64, f64)> = ring.iter().map(|v| (v.x, v.y)).collect();
    // Close the ring
    if let Some(first) = coords.first().cloned() {
        coords.push(first);
    }
    Polygon::new(LineString::from(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_distance() {
        assert_close(distance(v(0.0, 0.0), v(3.0, 4.0)), 5.0);
        assert_close(distance(v(2.0, 2.0), v(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_bearing_compass_points() {
        let o = v(0.0, 0.0);
        assert_close(bearing(o, v(0.0, -1.0)), 0.0);
        assert_close(bearing(o, v(1.0, 0.0)), 90.0);
        assert_close(bearing(o, v(0.0, 1.0)), 180.0);
        assert_close(bearing(o, v(-1.0, 0.0)), 270.0);
        assert_close(bearing(o, v(1.0, -1.0)), 45.0);
    }

    #[test]
    fn test_bearing_of_coincident_points_is_zero() {
        assert_eq!(bearing(v(5.0, 5.0), v(5.0, 5.0)), 0.0);
    }

    #[test]
    fn test_bearing_stays_below_360() {
        let angle = bearing(v(0.0, 0.0), v(-1e-13, -1.0));
        assert!((0.0..360.0).contains(&angle));
    }

    #[test]
    fn test_offset_inverts_bearing() {
        let p = v(10.0, -3.0);
        let q = v(-4.0, 7.5);
        let reached = offset(p, bearing(p, q), distance(p, q));
        assert_close(reached.x, q.x);
        assert_close(reached.y, q.y);
    }

    #[test]
    fn test_offset_east_and_north() {
        let east = offset(v(0.0, 0.0), 90.0, 2.0);
        assert_close(east.x, 2.0);
        assert_close(east.y, 0.0);

        let north = offset(v(0.0, 0.0), 0.0, 2.0);
        assert_close(north.x, 0.0);
        assert_close(north.y, -2.0);
    }

    #[test]
    fn test_crossing_segments_intersect() {
        assert!(segments_intersect(v(0.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0)));
    }

    #[test]
    fn test_shared_endpoint_is_not_intersection() {
        assert!(!segments_intersect(v(0.0, 0.0), v(2.0, 2.0), v(2.0, 2.0), v(4.0, 0.0)));
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(!segments_intersect(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)));
    }

    #[test]
    fn test_point_in_polygon() {
        let square = [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)];
        assert!(point_in_polygon(v(2.0, 2.0), &square));
        assert!(!point_in_polygon(v(5.0, 2.0), &square));
        assert!(!point_in_polygon(v(2.0, 2.0), &square[..2]));
    }
}
