// License: MIT

use std::collections::{HashMap, HashSet};

use crate::core::page::NodeId;
use crate::core::utils::node_label;

/// One tracked identity: the display label it was first seen under, the
/// open-interval mark, and the accumulated total.
///
/// Invariants: `total_secs >= 0` and monotonically non-decreasing;
/// `start_ms` is `Some` iff the entry is presently in an open interval;
/// at most one open interval per entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLog {
    label: String,
    start_ms: Option<u64>,
    total_secs: f64,
}

impl NodeLog {
    fn new(label: String) -> Self {
        Self {
            label,
            start_ms: None,
            total_secs: 0.0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start_ms(&self) -> Option<u64> {
        self.start_ms
    }

    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    pub fn is_open(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Close the open interval, folding elapsed time into the total.
    /// Negative elapsed (clock irregularity) clamps to zero.
    pub(crate) fn close(&mut self, now_ms: u64) {
        if let Some(start) = self.start_ms.take() {
            self.total_secs += now_ms.saturating_sub(start) as f64 / 1000.0;
        }
    }

    /// Open an interval at `now_ms` if none is open.
    pub(crate) fn reopen(&mut self, now_ms: u64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
    }

    /// Move the open-interval mark to `now_ms` without crediting the
    /// elapsed span. No-op when closed.
    pub(crate) fn roll_forward(&mut self, now_ms: u64) {
        if self.start_ms.is_some() {
            self.start_ms = Some(now_ms);
        }
    }
}

/// Index into the session's log arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogId(usize);

/// Everything one tracking session owns.
///
/// Constructed at page load, dropped at unload; no ambient globals, so
/// tests build a fresh one per case. Entries are created lazily on first
/// sight of a node and never removed, even after the backing node is
/// detached.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    last_activity_ms: u64,

    // Last sampled edge proximity; position-dependent threshold selection
    // for events that carry no snapshot of their own.
    near_edges: bool,

    // Arena in insertion order, plus the two lookup tables: the per-node
    // side table and the display-label table (collision rule).
    logs: Vec<NodeLog>,
    by_node: HashMap<NodeId, LogId>,
    by_label: HashMap<String, LogId>,
}

impl SessionState {
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_activity_ms: now_ms,
            ..Default::default()
        }
    }

    // ---------------- activity ----------------

    pub fn last_activity_ms(&self) -> u64 {
        self.last_activity_ms
    }

    pub(crate) fn note_activity(&mut self, now_ms: u64) {
        self.last_activity_ms = now_ms;
    }

    pub fn near_edges(&self) -> bool {
        self.near_edges
    }

    pub(crate) fn set_near_edges(&mut self, v: bool) {
        self.near_edges = v;
    }

    // ---------------- log arena ----------------

    /// The entry a node accounts against, creating a closed entry on first
    /// sight.
    ///
    /// Identity is the per-node handle. A node first seen under a label an
    /// existing entry already carries joins that entry and shares its
    /// total. Duplicate-text nodes therefore conflate; this mirrors the
    /// documented content-key collision rule and is kept as-is.
    pub(crate) fn log_for_node(&mut self, id: NodeId, text: &str) -> LogId {
        if let Some(&lid) = self.by_node.get(&id) {
            return lid;
        }

        let label = node_label(text);
        let lid = match self.by_label.get(&label) {
            Some(&lid) => lid,
            None => {
                let lid = LogId(self.logs.len());
                self.logs.push(NodeLog::new(label.clone()));
                self.by_label.insert(label, lid);
                lid
            }
        };

        self.by_node.insert(id, lid);
        lid
    }

    pub fn lookup_node(&self, id: NodeId) -> Option<LogId> {
        self.by_node.get(&id).copied()
    }

    pub fn lookup_label(&self, label: &str) -> Option<LogId> {
        self.by_label.get(label).copied()
    }

    pub fn log(&self, id: LogId) -> &NodeLog {
        &self.logs[id.0]
    }

    pub(crate) fn log_mut(&mut self, id: LogId) -> &mut NodeLog {
        &mut self.logs[id.0]
    }

    /// Entries in insertion order.
    pub fn logs(&self) -> impl Iterator<Item = &NodeLog> {
        self.logs.iter()
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn total_for_label(&self, label: &str) -> Option<f64> {
        self.lookup_label(label).map(|lid| self.log(lid).total_secs())
    }

    // ---------------- interval transitions ----------------

    /// Close every open entry not named in `keep`.
    pub(crate) fn close_open_except(&mut self, keep: &HashSet<LogId>, now_ms: u64) {
        for (i, log) in self.logs.iter_mut().enumerate() {
            if log.is_open() && !keep.contains(&LogId(i)) {
                log.close(now_ms);
            }
        }
    }

    /// Close-and-reopen every open entry at `now_ms`, folding the elapsed
    /// span into its total.
    pub(crate) fn fold_open(&mut self, now_ms: u64) {
        for log in &mut self.logs {
            if log.is_open() {
                log.close(now_ms);
                log.reopen(now_ms);
            }
        }
    }

    /// Move every open interval to `now_ms` without crediting.
    pub(crate) fn roll_open_forward(&mut self, now_ms: u64) {
        for log in &mut self.logs {
            log.roll_forward(now_ms);
        }
    }

    /// Close every open interval. Idempotent: a second call finds nothing
    /// open and changes no totals.
    pub(crate) fn flush(&mut self, now_ms: u64) {
        for log in &mut self.logs {
            log.close(now_ms);
        }
    }
}
