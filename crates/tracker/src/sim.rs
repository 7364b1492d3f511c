//! Simulated observation host.
//!
//! The tracker has to be exercisable without a browser host: tests need a
//! document they can shape and a clock they can advance, and the demo
//! binary needs a scripted scroll to play back.

use crate::clock::Clock;
use crate::host::{HostError, ObserverHost, Result};
use navspy_core::{IntersectionEntry, ObserverOptions, SectionId, Time};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Manually advanced clock.
///
/// Starts at the Unix epoch; time moves only through [`advance`](Self::advance).
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    /// Advance the clock.
    pub fn advance(&self, by: chrono::Duration) {
        self.millis
            .fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Time {
        Time::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

/// Observation bookkeeping shared with [`SimProbe`].
#[derive(Debug, Default)]
struct SimState {
    observed: Mutex<Vec<SectionId>>,
    disconnects: AtomicUsize,
}

/// In-memory stand-in for a document viewport.
///
/// Holds the set of section elements "present" in the document and records
/// registrations and disconnects for assertions.
#[derive(Debug)]
pub struct SimViewport {
    elements: HashSet<SectionId>,
    available: bool,
    state: Arc<SimState>,
}

impl SimViewport {
    /// A viewport whose document contains elements for the given ids.
    pub fn with_elements(ids: &[SectionId]) -> Self {
        Self {
            elements: ids.iter().cloned().collect(),
            available: true,
            state: Arc::new(SimState::default()),
        }
    }

    /// A viewport whose observation capability is unavailable.
    pub fn unavailable(ids: &[SectionId]) -> Self {
        Self {
            available: false,
            ..Self::with_elements(ids)
        }
    }

    /// Ids currently registered for observation.
    pub fn observed(&self) -> Vec<SectionId> {
        self.state
            .observed
            .lock()
            .map(|observed| observed.clone())
            .unwrap_or_default()
    }

    /// How many times observation was disconnected.
    pub fn disconnects(&self) -> usize {
        self.state.disconnects.load(Ordering::SeqCst)
    }

    /// A handle onto this viewport's bookkeeping that outlives it.
    pub fn probe(&self) -> SimProbe {
        SimProbe {
            state: self.state.clone(),
        }
    }
}

impl ObserverHost for SimViewport {
    fn resolve(&self, id: &SectionId) -> bool {
        self.elements.contains(id)
    }

    fn register(&mut self, ids: &[SectionId], _options: &ObserverOptions) -> Result<()> {
        if !self.available {
            return Err(HostError::Unavailable(
                "simulated host has no observation capability".to_string(),
            ));
        }
        if let Ok(mut observed) = self.state.observed.lock() {
            *observed = ids.to_vec();
        }
        Ok(())
    }

    fn unregister(&mut self) {
        let had_observation = self
            .state
            .observed
            .lock()
            .map(|mut observed| {
                let had = !observed.is_empty();
                observed.clear();
                had
            })
            .unwrap_or(false);
        if had_observation {
            self.state.disconnects.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Handle onto a [`SimViewport`]'s bookkeeping, independent of its owner.
#[derive(Debug, Clone)]
pub struct SimProbe {
    state: Arc<SimState>,
}

impl SimProbe {
    /// How many times observation was disconnected.
    pub fn disconnects(&self) -> usize {
        self.state.disconnects.load(Ordering::SeqCst)
    }
}

/// One step of a scripted scroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollStep {
    /// A batch of intersection changes delivered by the viewport
    Batch(Vec<IntersectionEntry>),
    /// A navigation click jumping to a section
    Jump(SectionId),
    /// Idle time between events, in milliseconds
    Settle(u64),
}

/// A scripted scroll through the portfolio page.
///
/// Scrolls from the hero down through the first sections, jumps to the
/// contact form via the nav bar (intermediate sections flash past during
/// the smooth scroll), then drifts back up after the highlight settles.
pub fn portfolio_scroll_script() -> Vec<ScrollStep> {
    vec![
        ScrollStep::Batch(vec![IntersectionEntry::visible("about", 1.0)]),
        ScrollStep::Settle(400),
        ScrollStep::Batch(vec![
            IntersectionEntry::visible("about", 0.3),
            IntersectionEntry::visible("projects", 0.7),
        ]),
        ScrollStep::Settle(400),
        ScrollStep::Batch(vec![
            IntersectionEntry::hidden("about"),
            IntersectionEntry::visible("projects", 0.4),
            IntersectionEntry::visible("music", 0.6),
        ]),
        ScrollStep::Settle(400),
        ScrollStep::Jump(SectionId::from("contact")),
        // The smooth scroll sweeps these past the viewport; the manual
        // highlight must not flicker through them.
        ScrollStep::Batch(vec![IntersectionEntry::visible("writing", 0.9)]),
        ScrollStep::Settle(300),
        ScrollStep::Batch(vec![IntersectionEntry::visible("education", 0.8)]),
        ScrollStep::Settle(300),
        ScrollStep::Batch(vec![IntersectionEntry::visible("contact", 1.0)]),
        // Wait out the suppression window, then scroll back up a little.
        ScrollStep::Settle(1600),
        ScrollStep::Batch(vec![
            IntersectionEntry::visible("contact", 0.2),
            IntersectionEntry::visible("education", 0.8),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_starts_at_epoch_and_advances() {
        let clock = ManualClock::default();
        let start = clock.now();
        clock.advance(chrono::Duration::milliseconds(250));
        assert_eq!(clock.now() - start, chrono::Duration::milliseconds(250));
    }

    #[test]
    fn test_sim_viewport_resolves_only_declared_elements() {
        let viewport = SimViewport::with_elements(&[SectionId::from("about")]);
        assert!(viewport.resolve(&SectionId::from("about")));
        assert!(!viewport.resolve(&SectionId::from("contact")));
    }

    #[test]
    fn test_unregister_without_registration_is_not_a_disconnect() {
        let mut viewport = SimViewport::with_elements(&[SectionId::from("about")]);
        viewport.unregister();
        assert_eq!(viewport.disconnects(), 0);
    }

    #[test]
    fn test_scroll_script_round_trips_through_json() {
        let script = portfolio_scroll_script();
        let json = serde_json::to_string(&script).unwrap();
        let parsed: Vec<ScrollStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), script.len());
    }
}
