//! Pose scoring engine for gymnastics routines.
//!
//! The core is [`analyze_pose`]: a pure, synchronous function from a
//! sequence of landmark frames to a [`gym_models::ScoreRecord`]. It performs
//! no I/O, holds no state between calls, and may be invoked concurrently.
//! The [`interpolate`] helper up-samples a low-rate landmark stream for
//! smooth overlay playback; scoring always operates on the original frames.

pub mod angles;
pub mod csv;
pub mod engine;
pub mod feedback;
pub mod interpolate;

pub use angles::joint_angle;
pub use csv::sessions_to_csv;
pub use engine::analyze_pose;
pub use interpolate::interpolate;
