//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - form: wizard tabs, fields and markers
//! - config: device configuration model, time table, option lists
//! - files: file panel entries and categories
//! - status: device telemetry snapshot

pub mod config;
pub mod files;
pub mod form;
pub mod status;

// Re-export all types
pub use config::*;
pub use files::*;
pub use form::*;
pub use status::*;
