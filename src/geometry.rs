// Cattle Health Assessment 🐄 AGPL-3.0 License

//! 2D geometry helpers for landmark measurements.

/// A point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal pixel coordinate.
    pub x: f64,
    /// Vertical pixel coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// Angle of the line from `p1` to `p2`, in degrees within (-180, 180].
///
/// Image coordinates grow downward, so a positive angle points below the
/// horizontal.
#[must_use]
pub fn angle(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

/// Midpoint of the segment between two points.
#[must_use]
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_symmetric() {
        let p1 = Point::new(3.0, 4.0);
        let p2 = Point::new(-1.0, 7.5);
        assert!((distance(p1, p2) - distance(p2, p1)).abs() < EPS);
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = Point::new(12.5, -3.0);
        assert!(distance(p, p).abs() < EPS);
    }

    #[test]
    fn test_distance_pythagorean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn test_angle_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        assert!((angle(origin, Point::new(1.0, 0.0)) - 0.0).abs() < EPS);
        assert!((angle(origin, Point::new(0.0, 1.0)) - 90.0).abs() < EPS);
        assert!((angle(origin, Point::new(-1.0, 0.0)) - 180.0).abs() < EPS);
        assert!((angle(origin, Point::new(0.0, -1.0)) + 90.0).abs() < EPS);
    }

    #[test]
    fn test_angle_reversal_differs_by_half_turn() {
        let p1 = Point::new(2.0, 3.0);
        let p2 = Point::new(-5.0, 11.0);
        let diff = (angle(p1, p2) - angle(p2, p1)).rem_euclid(360.0);
        assert!((diff - 180.0).abs() < EPS);
    }

    #[test]
    fn test_midpoint() {
        let mid = midpoint(Point::new(80.0, 200.0), Point::new(120.0, 200.0));
        assert!((mid.x - 100.0).abs() < EPS);
        assert!((mid.y - 200.0).abs() < EPS);
    }
}
