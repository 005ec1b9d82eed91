//! Shared data models for the GymScore backend.
//!
//! This crate provides Serde-serializable types for:
//! - Pose landmarks, joints and frames
//! - Score records and presentation bands
//! - Persisted analysis sessions
//! - Batch analysis progress tracking

pub mod batch;
pub mod frame;
pub mod landmark;
pub mod score;
pub mod session;

// Re-export common types
pub use batch::{BatchItemState, BatchItemStatus, BatchStatus};
pub use frame::Frame;
pub use landmark::{Joint, Landmark, SKELETON_CONNECTIONS};
pub use score::{ScoreBand, ScoreRecord};
pub use session::AnalysisSession;
