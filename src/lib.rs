//! Employee directory search and filter-aggregation engine
//!
//! Turns caller search intent (free text, organizational facets and status
//! flags such as "birthday today" or "on vacation") into time-windowed
//! queries against an external search service, and normalizes the nested
//! responses back into directory entities.

pub mod config;
pub mod directory;
pub mod error;
pub mod telemetry;

pub use error::{AppError, Result};
