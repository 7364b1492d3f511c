//! navspy core data models.
//!
//! This crate defines the data structures shared by the active-section
//! tracker and its hosts: section identities, intersection change
//! batches, and observer configuration.

#![warn(missing_docs)]

// Section identities
mod section;

// Viewport observation
mod intersection;
mod config;

// Re-exports
pub use section::{Section, SectionId, default_sections};
pub use intersection::IntersectionEntry;
pub use config::{ObserverOptions, TrackerConfig, DEFAULT_SUPPRESS_MS};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
