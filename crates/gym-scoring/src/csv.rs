//! CSV export of analysis sessions.

use gym_models::AnalysisSession;

const HEADERS: &[&str] = &[
    "Session ID",
    "Date",
    "AI Score",
    "Posture Score (%)",
    "Stability Score (%)",
    "Smoothness Score (%)",
    "Avg Knee Angle",
    "Avg Hip Angle",
    "Landing Stability",
    "Duration (seconds)",
    "Media URL",
    "Feedback",
];

/// Render sessions as CSV, one row per session, newest first if the input
/// is already ordered that way (row order follows input order).
pub fn sessions_to_csv(sessions: &[AnalysisSession]) -> String {
    let mut lines = Vec::with_capacity(sessions.len() + 1);
    lines.push(HEADERS.join(","));

    for session in sessions {
        let row = [
            escape_field(&session.id),
            escape_field(&session.created_at.to_rfc3339()),
            escape_field(&format!("{:.2}", session.ai_score)),
            escape_field(&session.posture_score.to_string()),
            escape_field(&session.stability_score.to_string()),
            escape_field(&session.smoothness_score.to_string()),
            escape_field(&format!("{:.2}", session.avg_knee_angle)),
            escape_field(&format!("{:.2}", session.avg_hip_angle)),
            escape_field(&format!("{:.2}", session.landing_stability)),
            session
                .duration_seconds
                .map(|d| escape_field(&format!("{d:.2}")))
                .unwrap_or_default(),
            escape_field(&session.media_url),
            escape_field(&session.feedback.join("\n")),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Quote a field if it contains a comma, quote or newline; double any
/// embedded quotes.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('\n') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_models::ScoreRecord;

    fn session(feedback: Vec<String>) -> AnalysisSession {
        let record = ScoreRecord {
            ai_score: 9.4,
            posture: 85,
            stability: 100,
            smoothness: 100,
            feedback,
            avg_knee_angle: 180.0,
            avg_hip_angle: 180.0,
            landing_stability: 100.0,
        };
        AnalysisSession::new("user-1", "https://example.com/a.mp4", &record, vec![])
    }

    #[test]
    fn test_header_and_row_count() {
        let csv = sessions_to_csv(&[session(vec![]), session(vec![])]);
        // Empty feedback means no quoted newlines, so one line per row
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with("Session ID,Date,AI Score"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let csv = sessions_to_csv(&[session(vec![
            "Smooth transitions detected – great flow between movements!".to_string(),
            "Outstanding posture control throughout the routine!".to_string(),
        ])]);
        // Feedback lines join with a newline, forcing quoting
        assert!(csv.contains("\"Smooth transitions"));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("plain"), "plain");
    }

    #[test]
    fn test_scores_to_two_decimals() {
        let csv = sessions_to_csv(&[session(vec![])]);
        assert!(csv.contains("9.40"));
        assert!(csv.contains("180.00"));
    }
}
