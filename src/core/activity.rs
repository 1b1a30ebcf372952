// License: MIT

use crate::core::config::TrackerConfig;
use crate::core::page::PageSnapshot;

/// Whether the scroll position sits within the configured offsets of the
/// document top or bottom.
///
/// Users commonly idle briefly at the extremes of a page (reached the end,
/// re-reading the top); the monitor switches to the shorter grace period
/// there so boundary dwell is not over-counted, while the long period
/// tolerates natural pauses mid-document.
pub fn near_page_edges(page: &PageSnapshot, cfg: &TrackerConfig) -> bool {
    page.scroll_y <= cfg.top_offset_px
        || page.scroll_y + page.viewport_height >= page.document_height - cfg.bottom_offset_px
}

/// Whether the user counts as active at `now_ms`.
///
/// The gap since the last qualifying input is compared strictly against
/// the position-dependent threshold. `saturating_sub` clamps a
/// non-monotonic clock to a zero gap.
pub fn is_active(last_activity_ms: u64, now_ms: u64, near_edges: bool, cfg: &TrackerConfig) -> bool {
    let gap = now_ms.saturating_sub(last_activity_ms);

    let threshold = if near_edges {
        cfg.short_inactivity_ms
    } else {
        cfg.inactivity_ms
    };

    gap < threshold
}
