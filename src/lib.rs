// License: MIT

//! Per-element dwell-time tracking for scrollable pages.
//!
//! The accounting core is a deterministic state machine: the host feeds it
//! page snapshots and input events carrying explicit timestamps, and it
//! maintains per-element accumulated visible time, pausing the clock while
//! the user is inactive. A thin tokio layer ([`session`]) drives the same
//! engine against a host-provided [`surface::PageSurface`] at a fixed poll
//! interval.

pub mod core;
pub mod log;
pub mod overlay;
pub mod session;
pub mod surface;

pub use crate::core::action::Action;
pub use crate::core::config::TrackerConfig;
pub use crate::core::error::{ConfigError, Error};
pub use crate::core::events::{ActivityKind, Event};
pub use crate::core::info::{EntryInfo, SessionInfo};
pub use crate::core::page::{NodeId, NodeRect, PageNode, PageSnapshot};
pub use crate::core::state::SessionState;
pub use crate::core::tracker::Tracker;
pub use crate::overlay::OverlayModel;
pub use crate::session::{ActivityHandle, Session, spawn_poll_task};
pub use crate::surface::{DebugSink, NullSink, PageSurface};
