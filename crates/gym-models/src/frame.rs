//! A single detected pose frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::landmark::{Joint, Landmark};

/// The full set of landmarks detected at one sampled instant.
///
/// Serializes as a plain landmark array, matching the detector wire format
/// (a routine is `Frame[]`, i.e. a landmark array per sampled instant).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Frame {
    pub landmarks: Vec<Landmark>,
}

impl Frame {
    /// Create a frame from a landmark list.
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Look up a joint by its typed identifier.
    ///
    /// Names are matched exactly against the detector's snake_case naming.
    /// Duplicate names are tolerated; the first match wins.
    pub fn joint(&self, joint: Joint) -> Option<&Landmark> {
        let name = joint.as_str();
        self.landmarks.iter().find(|lm| lm.name == name)
    }

    /// Number of landmarks in this frame.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// True if the frame has no landmarks.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

impl From<Vec<Landmark>> for Frame {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_lookup_first_match_wins() {
        let frame = Frame::new(vec![
            Landmark::new("left_hip", 0.4, 0.5, 0.9),
            Landmark::new("left_hip", 0.6, 0.5, 0.3),
        ]);
        let hip = frame.joint(Joint::LeftHip).unwrap();
        assert_eq!(hip.x, 0.4);
    }

    #[test]
    fn test_joint_lookup_is_exact() {
        // "left_hip_extra" must not satisfy a LeftHip lookup
        let frame = Frame::new(vec![Landmark::new("left_hip_extra", 0.4, 0.5, 0.9)]);
        assert!(frame.joint(Joint::LeftHip).is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let frame = Frame::new(vec![Landmark::new("left_knee", 0.5, 0.7, 0.9)]);
        let json = serde_json::to_value(&frame).unwrap();
        assert!(json.is_array());
    }
}
