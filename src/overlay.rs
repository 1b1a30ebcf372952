// License: MIT

//! Debug reporter: a pure consumer of sampler + accumulator state.
//!
//! Builds the overlay model out of the visible set and the full log
//! arena, and renders it to the markup the overlay element carries. The
//! host sink owns the actual DOM writes; this module never touches a
//! page.

use crate::core::page::PageNode;
use crate::core::state::SessionState;
use crate::core::utils::node_label;

/// DOM id of the single overlay element, created once and updated in
/// place on each tick.
pub const OVERLAY_ID: &str = "tracker-debug-info";

/// Inline background applied to visible tracked nodes (50% yellow).
pub const HIGHLIGHT_COLOR: &str = "rgba(255, 255, 0, 0.5)";

/// Visual contract of the overlay window.
pub mod style {
    pub const POSITION: &str = "fixed";
    pub const TOP: &str = "10px";
    pub const RIGHT: &str = "10px";
    pub const BACKGROUND: &str = "rgba(0, 0, 0, 0.7)";
    pub const COLOR: &str = "white";
    pub const PADDING: &str = "10px";
    pub const BORDER_RADIUS: &str = "5px";
    pub const Z_INDEX: &str = "9999";
    pub const MAX_WIDTH: &str = "250px";
    pub const MAX_HEIGHT: &str = "80vh";
    pub const OVERFLOW_Y: &str = "auto";
    pub const FONT_FAMILY: &str = "Arial, sans-serif";
    pub const FONT_SIZE: &str = "10px";
    pub const LINE_HEIGHT: &str = "1.2";
}

/// What the overlay shows on one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayModel {
    /// "Total Time Spent": one row per entry ever seen, insertion order.
    pub totals: Vec<(String, f64)>,

    /// "Currently Tracked Elements": labels of the visible nodes, sample
    /// order.
    pub visible: Vec<String>,
}

impl OverlayModel {
    pub fn build(state: &SessionState, visible: &[&PageNode]) -> Self {
        Self {
            totals: state
                .logs()
                .map(|log| (log.label().to_string(), log.total_secs()))
                .collect(),
            visible: visible.iter().map(|n| node_label(&n.text)).collect(),
        }
    }
}

/// Inner HTML of the overlay element.
pub fn render_html(model: &OverlayModel) -> String {
    let mut html = String::new();

    html.push_str(r#"<p style="margin: 0 0 10px; font-size: 10px;">Tracker Debug Info</p>"#);

    html.push_str(
        r#"<p style="margin: 0 0 5px; font-weight: bold; font-size: 10px;">Total Time Spent:</p>"#,
    );
    for (label, total) in &model.totals {
        html.push_str(&format!(
            r#"<p style="margin: 0 0 2px; font-size: 10px;">{label}: {total:.2}s</p>"#
        ));
    }

    html.push_str(
        r#"<p style="margin: 10px 0 5px; font-weight: bold; font-size: 10px;">Currently Tracked Elements:</p>"#,
    );
    for label in &model.visible {
        html.push_str(&format!(
            r#"<p style="margin: 0 0 2px; font-size: 10px;">{label}</p>"#
        ));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_totals_to_two_decimals() {
        let model = OverlayModel {
            totals: vec![("Intro".to_string(), 1.234_9), ("Body".to_string(), 0.0)],
            visible: vec!["Body".to_string()],
        };

        let html = render_html(&model);

        assert!(html.contains("Intro: 1.23s"));
        assert!(html.contains("Body: 0.00s"));
        assert!(html.contains("font-weight: bold"));
        assert!(html.contains("Total Time Spent:"));
        assert!(html.contains("Currently Tracked Elements:"));
    }

    #[test]
    fn section_order_is_totals_then_visible() {
        let model = OverlayModel {
            totals: vec![("A".to_string(), 0.5)],
            visible: vec!["A".to_string()],
        };

        let html = render_html(&model);
        let totals_at = html.find("Total Time Spent:").unwrap();
        let visible_at = html.find("Currently Tracked Elements:").unwrap();

        assert!(totals_at < visible_at);
    }
}
