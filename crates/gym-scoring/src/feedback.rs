//! Coaching feedback text generation.
//!
//! Feedback order is part of the engine contract: the UI renders the lines
//! as returned, and persisted sessions join them verbatim.

/// Knee averages this far under the ideal get the corrective message.
const STRAIGHT_LEG_THRESHOLD_DEG: f64 = 150.0;

/// Feedback line used when a routine had no scorable frames.
pub const NO_POSE_DATA: &str =
    "No usable pose data detected – unable to score this routine.";

/// Build the ordered feedback list from the final scores.
///
/// Lines 1-3 are always present (leg extension, stability, smoothness);
/// line 4 is additive praise for high posture scores.
pub fn generate(avg_knee_angle: f64, stability: u32, smoothness: u32, posture: u32) -> Vec<String> {
    let mut feedback = Vec::with_capacity(4);

    if avg_knee_angle < STRAIGHT_LEG_THRESHOLD_DEG {
        feedback.push(format!(
            "Knee bend averaged {avg_knee_angle:.1}° – try to keep legs straighter during jumps for better form."
        ));
    } else {
        feedback.push("Good leg extension! Knee angles are well maintained.".to_string());
    }

    if stability > 70 {
        feedback.push(
            "Excellent landing stability – body alignment is balanced throughout.".to_string(),
        );
    } else {
        feedback.push(
            "Work on landing stability – focus on keeping your center of gravity aligned over your feet."
                .to_string(),
        );
    }

    if smoothness > 75 {
        feedback.push("Smooth transitions detected – great flow between movements!".to_string());
    } else {
        feedback.push(
            "Practice smoother transitions between elements to improve overall flow.".to_string(),
        );
    }

    if posture > 80 {
        feedback.push("Outstanding posture control throughout the routine!".to_string());
    }

    feedback
}
