// License: MIT

use crate::core::page::PageSnapshot;

/// Which qualifying input stamped the activity clock.
///
/// Listeners carry no payload; every kind resets the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Scroll,
    Resize,
    PointerMove,
    KeyDown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Immediate reconciliation on page load, so the first paint begins
    /// accounting without waiting a full poll interval.
    PageLoaded {
        now_ms: u64,
        page: PageSnapshot,
    },

    /// A qualifying input was observed.
    UserActivity {
        kind: ActivityKind,
        now_ms: u64,
    },

    /// One scheduler tick with a fresh read of the page.
    Tick {
        now_ms: u64,
        page: PageSnapshot,
    },

    /// Page teardown (or an explicit flush): every open interval closes,
    /// regardless of activity state.
    Unload {
        now_ms: u64,
    },
}

impl Event {
    pub fn now_ms(&self) -> u64 {
        match self {
            Event::PageLoaded { now_ms, .. }
            | Event::UserActivity { now_ms, .. }
            | Event::Tick { now_ms, .. }
            | Event::Unload { now_ms } => *now_ms,
        }
    }
}
