// License: MIT

use crate::core::action::Action;
use crate::core::page::PageSnapshot;

/// Read-only view of the host page.
///
/// Selector matching, bounding-rectangle geometry, viewport dimensions,
/// scroll position, document height, and text content are the host's
/// duty; the tracker only ever consumes snapshots.
pub trait PageSurface: Send {
    fn snapshot(&mut self) -> PageSnapshot;
}

/// Applies debug actions to the host page: inline highlights plus the
/// single overlay element, created once and updated in place.
pub trait DebugSink: Send {
    fn apply(&mut self, action: Action);
}

/// Discards every action; for sessions without a debug consumer.
#[derive(Debug, Default)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn apply(&mut self, _action: Action) {}
}
