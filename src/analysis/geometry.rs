//! Vector-geometry angle computation from user-placed landmarks.
//!
//! Two measurements come out of this module: the navicular angle (vertex
//! angle of a three-point triangle placed on the medial view) and the
//! rearfoot angle (signed deviation between the calf and heel alignment
//! lines placed on the posterior view). Both operate on source-image
//! pixel coordinates.

use serde::{Deserialize, Serialize};

/// A point in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Which foot an analysis run concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootSide {
    Left,
    Right,
}

/// Triangle landmarks for the navicular angle. `p3` is the vertex
/// (navicular bone); `p1` and `p2` are the heel and forefoot landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrianglePoints {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

/// Two-point alignment segments for the rearfoot angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentLines {
    pub calf: [Point; 2],
    pub heel: [Point; 2],
}

/// Vertex angle at `p3` in degrees.
///
/// A zero-length leg makes the angle undefined; that degenerate input
/// yields 0 rather than an error.
pub fn navicular_angle(triangle: &TrianglePoints) -> f64 {
    let TrianglePoints { p1, p2, p3 } = *triangle;

    let a = Point { x: p1.x - p3.x, y: p1.y - p3.y };
    let b = Point { x: p2.x - p3.x, y: p2.y - p3.y };

    let mag_a = (a.x * a.x + a.y * a.y).sqrt();
    let mag_b = (b.x * b.x + b.y * b.y).sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    let dot = a.x * b.x + a.y * b.y;
    // Clamp against floating-point drift before acos.
    let cos_theta = (dot / (mag_a * mag_b)).clamp(-1.0, 1.0);

    cos_theta.acos().to_degrees()
}

/// Signed deviation between the heel line and the calf line, in degrees,
/// normalized into `(-180, 180]`.
///
/// Sign convention: positive is valgus (eversion), negative is varus
/// (inversion), independent of which foot is measured. Raw image geometry
/// produces opposite raw signs for left and right feet, so the sign is
/// inverted for the right foot.
///
/// TODO: validate the right-foot sign flip against clinical ground truth;
/// it encodes an interpretation-symmetry assumption, not a measured fact.
pub fn rearfoot_angle(lines: &AlignmentLines, side: FootSide) -> f64 {
    let segment_angle = |p1: Point, p2: Point| (p2.y - p1.y).atan2(p2.x - p1.x);

    let angle_calf = segment_angle(lines.calf[0], lines.calf[1]);
    let angle_heel = segment_angle(lines.heel[0], lines.heel[1]);

    let mut diff = (angle_heel - angle_calf).to_degrees();

    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff <= -180.0 {
        diff += 360.0;
    }

    match side {
        FootSide::Right => -diff,
        FootSide::Left => diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn perpendicular_legs_give_ninety_degrees() {
        let triangle = TrianglePoints {
            p1: p(1.0, 0.0),
            p2: p(0.0, 1.0),
            p3: p(0.0, 0.0),
        };
        assert!((navicular_angle(&triangle) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn colinear_legs_give_straight_angle() {
        let triangle = TrianglePoints {
            p1: p(-1.0, 0.0),
            p2: p(1.0, 0.0),
            p3: p(0.0, 0.0),
        };
        assert!((navicular_angle(&triangle) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_triangle_returns_zero() {
        let triangle = TrianglePoints {
            p1: p(3.0, 4.0),
            p2: p(7.0, 1.0),
            p3: p(3.0, 4.0), // coincides with p1
        };
        assert_eq!(navicular_angle(&triangle), 0.0);
    }

    #[test]
    fn identical_segments_give_zero_for_both_sides() {
        let lines = AlignmentLines {
            calf: [p(0.0, 0.0), p(0.0, 10.0)],
            heel: [p(5.0, 0.0), p(5.0, 10.0)],
        };
        assert_eq!(rearfoot_angle(&lines, FootSide::Left), 0.0);
        assert_eq!(rearfoot_angle(&lines, FootSide::Right), 0.0);
    }

    #[test]
    fn sign_is_inverted_for_the_right_foot() {
        // Heel line rotated 10 degrees counter-clockwise from the calf line.
        let lines = AlignmentLines {
            calf: [p(0.0, 0.0), p(10.0, 0.0)],
            heel: [p(0.0, 0.0), p(10.0f64.to_radians().cos() * 10.0, 10.0f64.to_radians().sin() * 10.0)],
        };

        let left = rearfoot_angle(&lines, FootSide::Left);
        let right = rearfoot_angle(&lines, FootSide::Right);

        assert!((left - 10.0).abs() < 1e-9);
        assert!((right + 10.0).abs() < 1e-9);
    }

    #[test]
    fn difference_is_normalized_into_half_open_range() {
        // Calf at 170 degrees, heel at -170 degrees: the raw difference of
        // -340 must wrap to +20.
        let direction = |deg: f64| p(deg.to_radians().cos() * 10.0, deg.to_radians().sin() * 10.0);
        let lines = AlignmentLines {
            calf: [p(0.0, 0.0), direction(170.0)],
            heel: [p(0.0, 0.0), direction(-170.0)],
        };

        let left = rearfoot_angle(&lines, FootSide::Left);
        assert!((left - 20.0).abs() < 1e-9);
    }
}
