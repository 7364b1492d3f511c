//! Active-section tracking for a scroll-synced navigation bar.
//!
//! Reconciles two competing update sources into one "active" section id:
//! passive viewport-intersection observation and explicit user-initiated
//! navigation. Manual navigation wins for a time-boxed suppression window,
//! then passive observation regains authority.

#![warn(missing_docs)]

pub mod clock;
pub mod host;
pub mod tracker;
pub mod sim;

pub use clock::{Clock, SystemClock};
pub use host::{HostError, ObserverHost, Result};
pub use tracker::SectionTracker;
pub use sim::{ManualClock, ScrollStep, SimViewport, portfolio_scroll_script};
