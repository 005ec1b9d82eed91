//! Frame interpolation for overlay playback.
//!
//! Detection runs at a low rate (15 Hz by default) while the overlay renders
//! at display rate; blending adjacent detected frames keeps the skeleton
//! moving smoothly. Interpolated frames are display-only and never fed back
//! into scoring.

use gym_models::{Frame, Landmark};

/// Linearly blend two adjacent frames at fractional position `t` in [0, 1].
///
/// Landmarks are paired by positional index, not by name; callers must pass
/// frames with the same landmark layout (detectors emit a fixed joint order,
/// so adjacent frames of one stream always satisfy this). Position, depth
/// and confidence are all blended. If one frame is shorter, trailing
/// landmarks of the longer frame are dropped.
pub fn interpolate(a: &Frame, b: &Frame, t: f64) -> Frame {
    let landmarks = a
        .landmarks
        .iter()
        .zip(b.landmarks.iter())
        .map(|(la, lb)| Landmark {
            name: la.name.clone(),
            x: lerp(la.x, lb.x, t),
            y: lerp(la.y, lb.y, t),
            z: match (la.z, lb.z) {
                (Some(za), Some(zb)) => Some(lerp(za, zb, t)),
                _ => la.z,
            },
            score: lerp(la.score, lb.score, t),
        })
        .collect();
    Frame::new(landmarks)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: f64, y: f64, score: f64) -> Frame {
        Frame::new(vec![
            Landmark::new("left_hip", x, y, score),
            Landmark::new("left_knee", x + 0.1, y + 0.2, score).with_z(x),
        ])
    }

    #[test]
    fn test_endpoints_are_identities() {
        let a = frame(0.2, 0.3, 0.8);
        let b = frame(0.6, 0.5, 0.4);
        assert_eq!(interpolate(&a, &b, 0.0), a);
        assert_eq!(interpolate(&a, &b, 1.0), b);
    }

    #[test]
    fn test_midpoint() {
        let a = frame(0.2, 0.3, 0.8);
        let b = frame(0.6, 0.5, 0.4);
        let mid = interpolate(&a, &b, 0.5);
        assert!((mid.landmarks[0].x - 0.4).abs() < 1e-9);
        assert!((mid.landmarks[0].y - 0.4).abs() < 1e-9);
        assert!((mid.landmarks[0].score - 0.6).abs() < 1e-9);
        assert!((mid.landmarks[1].z.unwrap() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_mismatched_lengths_truncate() {
        let a = frame(0.2, 0.3, 0.8);
        let mut b = frame(0.6, 0.5, 0.4);
        b.landmarks.pop();
        let out = interpolate(&a, &b, 0.5);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_names_come_from_first_frame() {
        let a = frame(0.2, 0.3, 0.8);
        let b = frame(0.6, 0.5, 0.4);
        let out = interpolate(&a, &b, 0.25);
        assert_eq!(out.landmarks[0].name, "left_hip");
    }
}
