//! API handlers.

pub mod analyze;
pub mod batch;
pub mod health;
pub mod sessions;
