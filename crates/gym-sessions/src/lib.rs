//! Persistence for analysis sessions.
//!
//! Sessions are immutable rows: created once after an analysis run, read
//! back for history views and re-rendering, never updated. The production
//! deployment persists through an external row-oriented service; this crate
//! keeps the same repository-shaped interface over an in-memory table so
//! the API and tests do not depend on the hosted backend.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::SessionStore;
