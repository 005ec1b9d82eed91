//! The pose scoring engine.
//!
//! Maps an ordered sequence of landmark frames to a [`ScoreRecord`]: two
//! average joint angles, three 0-100 sub-scores, a 0-10 composite and the
//! ordered feedback list. Pure and total: any input, including an empty
//! sequence or frames with no usable landmarks, produces a well-defined
//! record without panicking.

use gym_models::{Frame, Joint, Landmark, ScoreRecord};
use tracing::debug;

use crate::angles::joint_angle;
use crate::feedback;

/// Ideal knee angle for gymnastics form (nearly straight legs), degrees.
const IDEAL_KNEE_ANGLE: f64 = 170.0;

/// Ideal hip angle (extended torso line), degrees.
const IDEAL_HIP_ANGLE: f64 = 175.0;

/// Knee deviation beyond this counts against smoothness, degrees.
const MAX_KNEE_DEVIATION: f64 = 35.0;

/// Minimum landmark confidence for the gated joints.
const MIN_CONFIDENCE: f64 = 0.5;

/// Hip/ankle horizontal offset under this counts as balanced.
const BALANCE_TOLERANCE: f64 = 0.1;

/// The four joints a frame must carry to be scorable.
struct FrameJoints<'a> {
    shoulder: &'a Landmark,
    hip: &'a Landmark,
    knee: &'a Landmark,
    ankle: &'a Landmark,
}

/// Resolve the scored joints, applying the confidence gate.
///
/// Hip, knee and ankle must clear [`MIN_CONFIDENCE`]; the shoulder only has
/// to be present (its confidence is not gated).
fn scored_joints(frame: &Frame) -> Option<FrameJoints<'_>> {
    let shoulder = frame.joint(Joint::LeftShoulder)?;
    let hip = frame.joint(Joint::LeftHip)?;
    let knee = frame.joint(Joint::LeftKnee)?;
    let ankle = frame.joint(Joint::LeftAnkle)?;

    if hip.score > MIN_CONFIDENCE && knee.score > MIN_CONFIDENCE && ankle.score > MIN_CONFIDENCE {
        Some(FrameJoints {
            shoulder,
            hip,
            knee,
            ankle,
        })
    } else {
        None
    }
}

/// Analyze a routine's landmark frames and produce its score record.
///
/// Frames are scored independently; frames missing a required joint or
/// failing the confidence gate are skipped, which is a normal operating
/// mode rather than an error. With no valid frames at all the engine
/// returns the zero record with a single explanatory feedback line.
pub fn analyze_pose(frames: &[Frame]) -> ScoreRecord {
    let mut total_knee_angle = 0.0;
    let mut total_hip_angle = 0.0;
    let mut valid_frames: u32 = 0;
    let mut posture_deviations: u32 = 0;
    let mut balanced_frames: u32 = 0;

    for frame in frames {
        let Some(joints) = scored_joints(frame) else {
            continue;
        };
        valid_frames += 1;

        let knee_angle = joint_angle(joints.hip, joints.knee, joints.ankle);
        total_knee_angle += knee_angle;

        let hip_angle = joint_angle(joints.shoulder, joints.hip, joints.knee);
        total_hip_angle += hip_angle;

        if (knee_angle - IDEAL_KNEE_ANGLE).abs() > MAX_KNEE_DEVIATION {
            posture_deviations += 1;
        }

        // Horizontal hip/ankle alignment as a balance proxy
        if (joints.hip.x - joints.ankle.x).abs() < BALANCE_TOLERANCE {
            balanced_frames += 1;
        }
    }

    debug!(
        total = frames.len(),
        valid = valid_frames,
        deviations = posture_deviations,
        "scored routine frames"
    );

    if valid_frames == 0 {
        return zero_record();
    }

    let valid = valid_frames as f64;
    let avg_knee_angle = total_knee_angle / valid;
    let avg_hip_angle = total_hip_angle / valid;
    let landing_stability = balanced_frames as f64 / valid * 100.0;

    let knee_score = (100.0 - (avg_knee_angle - IDEAL_KNEE_ANGLE).abs() * 2.0).max(0.0);
    let hip_score = (100.0 - (avg_hip_angle - IDEAL_HIP_ANGLE).abs() * 2.0).max(0.0);
    let posture = ((knee_score + hip_score) / 2.0).round() as u32;

    let stability = landing_stability.round() as u32;
    let smoothness =
        (100.0 - posture_deviations as f64 / valid * 100.0).max(0.0).round() as u32;

    let feedback = feedback::generate(avg_knee_angle, stability, smoothness, posture);

    let composite = (posture as f64 * 0.4 + stability as f64 * 0.3 + smoothness as f64 * 0.3) / 10.0;
    let ai_score = (composite * 10.0).round() / 10.0;

    ScoreRecord {
        ai_score,
        posture,
        stability,
        smoothness,
        feedback,
        avg_knee_angle,
        avg_hip_angle,
        landing_stability,
    }
}

/// Record returned when no frame was scorable (including empty input).
fn zero_record() -> ScoreRecord {
    ScoreRecord {
        ai_score: 0.0,
        posture: 0,
        stability: 0,
        smoothness: 0,
        feedback: vec![feedback::NO_POSE_DATA.to_string()],
        avg_knee_angle: 0.0,
        avg_hip_angle: 0.0,
        landing_stability: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Vertical-line pose: shoulder, hip, knee, ankle all at x=0.5.
    /// Both angles are exactly 180 degrees (collinear).
    fn collinear_frame() -> Frame {
        Frame::new(vec![
            Landmark::new("left_shoulder", 0.5, 0.2, 0.9),
            Landmark::new("left_hip", 0.5, 0.5, 0.95),
            Landmark::new("left_knee", 0.5, 0.7, 0.9),
            Landmark::new("left_ankle", 0.5, 0.9, 0.85),
        ])
    }

    /// Pose constructed so the knee angle is exactly 170 degrees, the hip
    /// angle exactly 175, and hip/ankle stay horizontally aligned.
    fn ideal_frame() -> Frame {
        let hip = (0.5, 0.5);
        let knee = (0.5, 0.7);
        // Knee->hip heading is -90 deg; place the ankle 170 deg away
        let ankle_heading = (-90.0f64 + 170.0).to_radians();
        let ankle = (
            knee.0 + 0.2 * ankle_heading.cos(),
            knee.1 + 0.2 * ankle_heading.sin(),
        );
        // Hip->knee heading is 90 deg; place the shoulder 175 deg away
        let shoulder_heading = (90.0f64 - 175.0).to_radians();
        let shoulder = (
            hip.0 + 0.3 * shoulder_heading.cos(),
            hip.1 + 0.3 * shoulder_heading.sin(),
        );
        Frame::new(vec![
            Landmark::new("left_shoulder", shoulder.0, shoulder.1, 0.9),
            Landmark::new("left_hip", hip.0, hip.1, 0.95),
            Landmark::new("left_knee", knee.0, knee.1, 0.9),
            Landmark::new("left_ankle", ankle.0, ankle.1, 0.85),
        ])
    }

    #[test]
    fn test_collinear_routine_scores() {
        // 30 frames of a perfectly vertical pose: knee and hip angles both
        // 180, so knee_score 80, hip_score 90, posture 85; hip.x == ankle.x
        // gives stability 100; |180-170| < 35 gives smoothness 100.
        let frames = vec![collinear_frame(); 30];
        let record = analyze_pose(&frames);

        assert_eq!(record.posture, 85);
        assert_eq!(record.stability, 100);
        assert_eq!(record.smoothness, 100);
        // (85*0.4 + 100*0.3 + 100*0.3) / 10 = 9.4
        assert_eq!(record.ai_score, 9.4);
        assert!((record.avg_knee_angle - 180.0).abs() < 1e-9);
        assert!((record.avg_hip_angle - 180.0).abs() < 1e-9);
        assert_eq!(record.landing_stability, 100.0);
    }

    #[test]
    fn test_ideal_angles_score_perfect() {
        let frames = vec![ideal_frame(); 10];
        let record = analyze_pose(&frames);

        assert_eq!(record.posture, 100);
        assert_eq!(record.stability, 100);
        assert_eq!(record.smoothness, 100);
        assert_eq!(record.ai_score, 10.0);
    }

    #[test]
    fn test_empty_input_returns_zero_record() {
        let record = analyze_pose(&[]);
        assert_eq!(record.ai_score, 0.0);
        assert_eq!(record.posture, 0);
        assert_eq!(record.stability, 0);
        assert_eq!(record.smoothness, 0);
        assert_eq!(record.feedback, vec![feedback::NO_POSE_DATA.to_string()]);
    }

    #[test]
    fn test_low_confidence_frames_are_skipped() {
        let mut low = collinear_frame();
        for lm in &mut low.landmarks {
            lm.score = 0.4;
        }
        // Only low-confidence frames: zero path
        let record = analyze_pose(&[low.clone(), low.clone()]);
        assert_eq!(record.ai_score, 0.0);

        // Mixed with good frames, the low ones are excluded from averages
        let record = analyze_pose(&[low, collinear_frame()]);
        assert!((record.avg_knee_angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_shoulder_confidence_not_gated() {
        let mut frame = collinear_frame();
        frame.landmarks[0].score = 0.1; // left_shoulder
        let record = analyze_pose(&[frame]);
        assert!(record.ai_score > 0.0);
    }

    #[test]
    fn test_missing_joint_invalidates_frame() {
        let mut frame = collinear_frame();
        frame.landmarks.retain(|lm| lm.name != "left_ankle");
        let record = analyze_pose(&[frame]);
        assert_eq!(record.ai_score, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let frames = vec![collinear_frame(); 5];
        let a = analyze_pose(&frames);
        let b = analyze_pose(&frames);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scores_stay_in_range() {
        // Degenerate geometry: all landmarks at one point
        let point = Frame::new(vec![
            Landmark::new("left_shoulder", 0.5, 0.5, 0.9),
            Landmark::new("left_hip", 0.5, 0.5, 0.9),
            Landmark::new("left_knee", 0.5, 0.5, 0.9),
            Landmark::new("left_ankle", 0.5, 0.5, 0.9),
        ]);
        // Sharply bent pose, far off balance
        let bent = Frame::new(vec![
            Landmark::new("left_shoulder", 0.1, 0.2, 0.9),
            Landmark::new("left_hip", 0.9, 0.5, 0.9),
            Landmark::new("left_knee", 0.1, 0.6, 0.9),
            Landmark::new("left_ankle", 0.5, 0.2, 0.9),
        ]);
        for frames in [vec![point], vec![bent], vec![collinear_frame()]] {
            let record = analyze_pose(&frames);
            assert!(record.posture <= 100);
            assert!(record.stability <= 100);
            assert!(record.smoothness <= 100);
            assert!((0.0..=10.0).contains(&record.ai_score));
            assert!(record.ai_score.is_finite());
        }
    }

    #[test]
    fn test_ai_score_recomputable_from_sub_scores() {
        let frames = vec![collinear_frame(); 7];
        let record = analyze_pose(&frames);
        assert!((record.recompute_ai_score() - record.ai_score).abs() < 0.05);
    }
}
