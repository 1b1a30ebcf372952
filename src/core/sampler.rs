// License: MIT

use crate::core::page::{PageNode, PageSnapshot};

/// Which nodes currently count as visible under the active-zone rule.
///
/// `active_height = viewport_height * active_zone_fraction`; a node is
/// visible iff `rect.top < active_height && rect.bottom > 0`. Both bounds
/// are strict, so a node sitting exactly on either edge does not count.
/// The bottom of the viewport beyond the active zone is a dead zone: a
/// node scrolled into only that region has pixels on-screen but is not
/// visible for accounting.
///
/// Every sample is a fresh absolute computation; there is no hysteresis
/// and no memory of prior samples beyond what the accumulator keeps.
pub fn visible_nodes(page: &PageSnapshot, active_zone_fraction: f64) -> Vec<&PageNode> {
    let active_height = page.viewport_height * active_zone_fraction;

    page.nodes
        .iter()
        .filter(|n| n.rect.top < active_height && n.rect.bottom > 0.0)
        .collect()
}
