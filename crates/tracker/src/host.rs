//! Observation host abstraction.

use navspy_core::{ObserverOptions, SectionId};

/// Error type for host operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors that can occur when talking to the observation host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The intersection-observation capability is not available
    #[error("intersection observation unavailable: {0}")]
    Unavailable(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// The DOM-like capability the tracker observes sections through.
///
/// An implementation resolves section ids to elements of the hosting
/// document and registers them for intersection observation. The host
/// delivers visibility batches back to the tracker by calling
/// [`SectionTracker::on_intersections`](crate::SectionTracker::on_intersections);
/// delivery is serialized by the host, never concurrent.
pub trait ObserverHost {
    /// Whether a section id resolves to an element in the document.
    ///
    /// A section that does not exist yet (or was removed) is skipped at
    /// bind time, not treated as an error.
    fn resolve(&self, id: &SectionId) -> bool;

    /// Register the given sections for intersection observation.
    fn register(&mut self, ids: &[SectionId], options: &ObserverOptions) -> Result<()>;

    /// Disconnect all observation. Safe to call more than once.
    fn unregister(&mut self);
}
