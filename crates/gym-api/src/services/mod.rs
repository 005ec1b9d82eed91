//! API services.

pub mod batch;

pub use batch::BatchRunner;
