//! Active-section tracker state machine.

use crate::clock::Clock;
use crate::host::ObserverHost;
use navspy_core::{IntersectionEntry, SectionId, Time, TrackerConfig};
use std::sync::Arc;
use tracing::{debug, warn};

/// Time-boxed manual highlight, pinned by a navigation click.
#[derive(Debug, Clone)]
struct ManualOverride {
    id: SectionId,
    until: Time,
}

/// Lifecycle of the tracker's observation binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Bound and receiving passive batches
    Observing,
    /// Registration failed or nothing resolved; passive updates are inert
    Degraded,
    /// Torn down, terminal
    Released,
}

/// Tracks which page section a scroll-synced navigation bar should
/// highlight.
///
/// Two inputs compete for the active id: passive intersection batches
/// delivered by the host, and [`trigger_manual`](Self::trigger_manual)
/// calls from navigation clicks. A manual call pins the active id for a
/// suppression window (a smooth programmatic scroll makes intermediate
/// sections transiently intersect in an order that does not match user
/// intent); once the window lapses, the next passive batch regains
/// authority.
pub struct SectionTracker<H: ObserverHost> {
    host: H,
    clock: Arc<dyn Clock>,
    config: TrackerConfig,

    /// Full input id list, in page order
    ids: Vec<SectionId>,
    /// Subset of `ids` that resolved to elements at bind time
    bound: Vec<SectionId>,

    active: Option<SectionId>,
    manual: Option<ManualOverride>,
    phase: Phase,
}

impl<H: ObserverHost> SectionTracker<H> {
    /// Bind the tracker to a host for the given section ids.
    ///
    /// Ids that do not resolve to an element are skipped. If nothing
    /// resolves, or observation registration fails, the tracker comes up
    /// degraded: it reports no active section and ignores passive batches
    /// rather than failing the page.
    pub fn bind(
        host: H,
        ids: &[SectionId],
        config: TrackerConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut tracker = Self {
            host,
            clock,
            config,
            ids: Vec::new(),
            bound: Vec::new(),
            active: None,
            manual: None,
            phase: Phase::Degraded,
        };
        tracker.attach(ids);
        tracker
    }

    /// Resolve and register `ids`, setting the observation phase.
    fn attach(&mut self, ids: &[SectionId]) {
        self.ids = ids.to_vec();
        self.bound = ids
            .iter()
            .filter(|id| self.host.resolve(id))
            .cloned()
            .collect();

        if self.bound.is_empty() {
            debug!("no section ids resolved, nothing to observe");
            self.phase = Phase::Degraded;
            return;
        }

        match self.host.register(&self.bound, &self.config.observer) {
            Ok(()) => {
                debug!(sections = self.bound.len(), "observation bound");
                self.phase = Phase::Observing;
            }
            Err(e) => {
                warn!(error = %e, "observation registration failed, tracker degraded");
                self.phase = Phase::Degraded;
            }
        }
    }

    /// Effective active section id.
    ///
    /// While a manual override is unexpired this is the manually set id,
    /// regardless of real intersection state; otherwise the last passively
    /// selected id, or `None` before the first observation.
    pub fn active(&self) -> Option<&SectionId> {
        if let Some(manual) = &self.manual {
            if manual.until > self.clock.now() {
                return Some(&manual.id);
            }
        }
        self.active.as_ref()
    }

    /// The section ids this tracker was bound with, in page order.
    pub fn ids(&self) -> &[SectionId] {
        &self.ids
    }

    /// Access the observation host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Deliver a passive intersection batch from the host.
    ///
    /// Ignored after teardown, while degraded, and while a manual override
    /// is unexpired. Among intersecting entries the highest ratio wins;
    /// on a tie the first match in batch order wins. If nothing intersects
    /// the active id keeps its previous value, so the highlight never
    /// flickers to none mid-scroll.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) {
        if self.phase != Phase::Observing {
            debug!(phase = ?self.phase, "passive batch ignored");
            return;
        }

        if let Some(manual) = &self.manual {
            if manual.until > self.clock.now() {
                debug!(pinned = %manual.id, "passive batch suppressed by manual highlight");
                return;
            }
            // Window lapsed; passive observation resumes with this batch.
            self.manual = None;
        }

        let mut best: Option<&IntersectionEntry> = None;
        for entry in entries {
            if !entry.is_intersecting || !self.ids.contains(&entry.id) {
                continue;
            }
            // Strict comparison keeps the first entry on equal ratios.
            match best {
                Some(b) if entry.ratio <= b.ratio => {}
                _ => best = Some(entry),
            }
        }

        if let Some(entry) = best {
            if self.active.as_ref() != Some(&entry.id) {
                debug!(section = %entry.id, ratio = entry.ratio, "active section changed");
            }
            self.active = Some(entry.id.clone());
        }
    }

    /// Pin the active section from a navigation click.
    ///
    /// Sets the active id immediately and suppresses passive updates for
    /// the configured window while the programmatic scroll settles. Ids
    /// outside the bound list are rejected so the active id always stays
    /// a member of the section set.
    pub fn trigger_manual(&mut self, id: impl Into<SectionId>) {
        if self.phase == Phase::Released {
            return;
        }

        let id = id.into();
        if !self.ids.contains(&id) {
            warn!(section = %id, "manual highlight for unknown section ignored");
            return;
        }

        let until = self.clock.now() + self.config.suppress_duration();
        debug!(section = %id, "manual highlight");
        self.active = Some(id.clone());
        self.manual = Some(ManualOverride { id, until });
    }

    /// Rebind to a changed id list.
    ///
    /// Disconnects the old observation, re-resolves elements, and resets
    /// any manual override. The previous active id is kept only if it is
    /// still a member of the new list.
    pub fn rebind(&mut self, ids: &[SectionId]) {
        if self.phase == Phase::Released {
            return;
        }

        self.host.unregister();
        self.manual = None;
        self.attach(ids);

        if let Some(active) = &self.active {
            if !self.ids.contains(active) {
                self.active = None;
            }
        }
    }

    /// Tear the tracker down.
    ///
    /// Disconnects the host and cancels any pending suppression; no
    /// further batch or manual call has any effect. Idempotent.
    pub fn release(&mut self) {
        if self.phase == Phase::Released {
            return;
        }
        debug!("tracker released");
        self.host.unregister();
        self.manual = None;
        self.active = None;
        self.phase = Phase::Released;
    }
}

impl<H: ObserverHost> Drop for SectionTracker<H> {
    fn drop(&mut self) {
        self.release();
    }
}
