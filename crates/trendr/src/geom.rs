#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Euclidean distance between two points.
pub fn get_distance_between(p1: Point, p2: Point) -> f64 {
    (p2 - p1).length()
}

/// Exact collinearity test (cross-product identity), no tolerance.
/// Mirrors upstream `checkForCollinearPoints`, which compares with `===`.
pub fn check_for_collinear_points(p1: Point, p2: Point, p3: Point) -> bool {
    (p1.y - p2.y) * (p1.x - p3.x) == (p1.y - p3.y) * (p1.x - p2.x)
}

/// Point `distance` units away from `to`, along the direction from `to`
/// toward `from`. Unclamped; coincident endpoints divide by a zero length
/// and propagate non-finite components, as upstream `moveTo` does.
pub fn move_to(from: Point, to: Point, distance: f64) -> Point {
    let vector = from - to;
    let unit = vector / vector.length();
    to + unit * distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_distance_between_is_euclidean() {
        assert_eq!(get_distance_between(point(0.0, 0.0), point(3.0, 4.0)), 5.0);
        assert_eq!(get_distance_between(point(1.0, 1.0), point(1.0, 1.0)), 0.0);
    }

    #[test]
    fn check_for_collinear_points_is_exact() {
        assert!(check_for_collinear_points(
            point(0.0, 0.0),
            point(5.0, 0.0),
            point(10.0, 0.0)
        ));
        assert!(check_for_collinear_points(
            point(0.0, 0.0),
            point(1.0, 1.0),
            point(2.0, 2.0)
        ));
        assert!(!check_for_collinear_points(
            point(0.0, 0.0),
            point(1.0, 1.0),
            point(2.0, 2.0000000001)
        ));
        // A repeated point is a degenerate (collinear) triple.
        assert!(check_for_collinear_points(
            point(2.0, 3.0),
            point(2.0, 3.0),
            point(9.0, 1.0)
        ));
    }

    #[test]
    fn move_to_offsets_from_the_target_toward_the_source() {
        assert_eq!(
            move_to(point(0.0, 0.0), point(10.0, 0.0), 2.0),
            point(8.0, 0.0)
        );
        assert_eq!(
            move_to(point(10.0, 10.0), point(10.0, 0.0), 2.0),
            point(10.0, 2.0)
        );
        // Distances beyond the segment length are not clamped.
        assert_eq!(
            move_to(point(0.0, 0.0), point(1.0, 0.0), 5.0),
            point(-4.0, 0.0)
        );
    }
}
