//! Planar joint-angle calculation.

use gym_models::Landmark;

/// Angle in degrees at vertex `p2` formed by the rays `p2->p1` and `p2->p3`.
///
/// Computed as the absolute difference of the two ray headings
/// (`atan2`), reflected into [0, 180]:
/// - 180 degrees = the three points are collinear (fully extended joint)
/// - 90 degrees = fully bent
pub fn joint_angle(p1: &Landmark, p2: &Landmark, p3: &Landmark) -> f64 {
    let radians = (p3.y - p2.y).atan2(p3.x - p2.x) - (p1.y - p2.y).atan2(p1.x - p2.x);
    let mut angle = radians.to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lm(x: f64, y: f64) -> Landmark {
        Landmark::new("joint", x, y, 0.9)
    }

    #[test]
    fn test_collinear_points_give_180() {
        let angle = joint_angle(&lm(0.5, 0.5), &lm(0.5, 0.7), &lm(0.5, 0.9));
        assert!((angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_angle() {
        let angle = joint_angle(&lm(0.0, 0.0), &lm(0.5, 0.0), &lm(0.5, 0.5));
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_reflection_into_upper_half() {
        // Heading difference of 270 degrees must reflect to 90
        let angle = joint_angle(&lm(0.5, 0.5), &lm(0.5, 0.0), &lm(1.0, 0.0));
        assert!(angle <= 180.0);
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_in_outer_points() {
        let a = joint_angle(&lm(0.2, 0.1), &lm(0.5, 0.5), &lm(0.9, 0.3));
        let b = joint_angle(&lm(0.9, 0.3), &lm(0.5, 0.5), &lm(0.2, 0.1));
        assert!((a - b).abs() < 1e-9);
    }
}
