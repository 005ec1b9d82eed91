//! Pose landmarks and joint identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single named body-joint position detected in one frame.
///
/// Coordinates are normalized to the frame dimensions (0.0 = left/top,
/// 1.0 = right/bottom). Detector noise can push them slightly outside
/// [0, 1]; they are not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Landmark {
    /// Joint name as reported by the detector (e.g. "left_hip")
    pub name: String,
    /// Normalized horizontal position
    pub x: f64,
    /// Normalized vertical position
    pub y: f64,
    /// Normalized depth, if the detector provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detection confidence (0.0-1.0)
    pub score: f64,
}

impl Landmark {
    /// Create a 2D landmark.
    pub fn new(name: impl Into<String>, x: f64, y: f64, score: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z: None,
            score,
        }
    }

    /// Set the depth coordinate.
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }
}

/// Typed joint identifier.
///
/// Replaces string matching against detector names at lookup sites: code
/// that needs a particular joint asks for a `Joint`, and the frame index
/// resolves it against the detector's snake_case naming exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl Joint {
    /// The detector wire name for this joint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skeleton edges for overlay rendering, as joint pairs.
///
/// Drawn between landmarks whose confidence clears the renderer's own
/// threshold; scoring does not use this table.
pub const SKELETON_CONNECTIONS: &[(Joint, Joint)] = &[
    // Torso
    (Joint::LeftShoulder, Joint::RightShoulder),
    (Joint::LeftHip, Joint::RightHip),
    (Joint::LeftShoulder, Joint::LeftHip),
    (Joint::RightShoulder, Joint::RightHip),
    // Arms
    (Joint::LeftShoulder, Joint::LeftElbow),
    (Joint::LeftElbow, Joint::LeftWrist),
    (Joint::RightShoulder, Joint::RightElbow),
    (Joint::RightElbow, Joint::RightWrist),
    // Legs
    (Joint::LeftHip, Joint::LeftKnee),
    (Joint::LeftKnee, Joint::LeftAnkle),
    (Joint::LeftAnkle, Joint::LeftHeel),
    (Joint::LeftAnkle, Joint::LeftFootIndex),
    (Joint::LeftHeel, Joint::LeftFootIndex),
    (Joint::RightHip, Joint::RightKnee),
    (Joint::RightKnee, Joint::RightAnkle),
    (Joint::RightAnkle, Joint::RightHeel),
    (Joint::RightAnkle, Joint::RightFootIndex),
    (Joint::RightHeel, Joint::RightFootIndex),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_wire_names() {
        assert_eq!(Joint::LeftHip.as_str(), "left_hip");
        assert_eq!(Joint::RightFootIndex.as_str(), "right_foot_index");
    }

    #[test]
    fn test_joint_serde_matches_as_str() {
        let json = serde_json::to_string(&Joint::LeftShoulder).unwrap();
        assert_eq!(json, "\"left_shoulder\"");
    }

    #[test]
    fn test_landmark_roundtrip_without_z() {
        let lm = Landmark::new("left_knee", 0.5, 0.7, 0.9);
        let json = serde_json::to_string(&lm).unwrap();
        assert!(!json.contains("\"z\""));
        let back: Landmark = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lm);
    }
}
