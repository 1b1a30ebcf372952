// License: MIT

use serde::Serialize;

use crate::core::state::SessionState;
use crate::core::utils::format_secs;

/// Snapshot of a session for host consumption.
///
/// The serialized fields are the stable JSON contract; `pretty_text` is
/// the human-facing rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub entries: Vec<EntryInfo>,
    pub visible: Vec<String>,
    pub active: bool,

    #[serde(skip_serializing)]
    pub pretty_text: String,
}

/// One row per entry ever seen, insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct EntryInfo {
    pub label: String,
    pub total_secs: f64,
    pub open: bool,
}

impl SessionInfo {
    pub fn collect(state: &SessionState, active: bool) -> Self {
        let entries: Vec<EntryInfo> = state
            .logs()
            .map(|log| EntryInfo {
                label: log.label().to_string(),
                total_secs: log.total_secs(),
                open: log.is_open(),
            })
            .collect();

        // An entry is open iff a node mapping to it was visible at the
        // last reconciliation. During an inactive span reconciliation
        // is paused, so this set can lag real visibility until the
        // next active tick.
        let visible: Vec<String> = entries
            .iter()
            .filter(|e| e.open)
            .map(|e| e.label.clone())
            .collect();

        let mut pretty = String::new();
        for e in &entries {
            pretty.push_str(&format!("{}: {}\n", e.label, format_secs(e.total_secs)));
        }

        Self {
            entries,
            visible,
            active,
            pretty_text: pretty,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::Event;
    use crate::core::page::{NodeId, PageNode, PageSnapshot};
    use crate::core::tracker::Tracker;
    use crate::core::config::TrackerConfig;

    fn populated_state() -> SessionState {
        let t = Tracker::new(TrackerConfig::default()).unwrap();
        let mut state = SessionState::new(0);

        let page = PageSnapshot {
            viewport_height: 1000.0,
            scroll_y: 2000.0,
            document_height: 10000.0,
            nodes: vec![PageNode::new(NodeId(1), "Intro", 100.0, 150.0)],
        };

        t.handle_event(&mut state, Event::PageLoaded { now_ms: 0, page });
        state
    }

    #[test]
    fn json_contract_has_stable_shape() {
        let info = SessionInfo::collect(&populated_state(), true);
        let json: serde_json::Value = serde_json::from_str(&info.to_json().unwrap()).unwrap();

        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["label"], "Intro");
        assert_eq!(entries[0]["total_secs"], 0.0);
        assert_eq!(entries[0]["open"], true);

        assert_eq!(json["visible"], serde_json::json!(["Intro"]));
        assert_eq!(json["active"], true);

        // pretty_text is the human rendering, not part of the contract
        assert!(json.get("pretty_text").is_none());
    }

    #[test]
    fn visible_mirrors_open_entries() {
        let info = SessionInfo::collect(&populated_state(), true);

        assert_eq!(info.visible, vec!["Intro".to_string()]);
        assert!(info.pretty_text.contains("Intro: 0.00s"));
    }
}
