// License: MIT

use std::collections::HashSet;

use crate::core::{
    action::Action,
    activity::{is_active, near_page_edges},
    config::TrackerConfig,
    error::Error,
    events::Event,
    page::PageSnapshot,
    sampler::visible_nodes,
    state::SessionState,
};
use crate::overlay::OverlayModel;

/// The accounting engine.
///
/// Pure over `(SessionState, Event)`: timestamps and geometry arrive on
/// the events, so tests drive the whole machine with synthetic input. The
/// runtime layer owns clocks, timers, and the host surface.
#[derive(Debug, Clone)]
pub struct Tracker {
    cfg: TrackerConfig,
}

impl Tracker {
    pub fn new(cfg: TrackerConfig) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.cfg
    }

    pub fn handle_event(&self, state: &mut SessionState, event: Event) -> Vec<Action> {
        match event {
            Event::PageLoaded { now_ms, page } => {
                // First paint starts accounting immediately, without
                // waiting for a tick and without consulting the monitor.
                state.set_near_edges(near_page_edges(&page, &self.cfg));
                self.reconcile(state, &page, now_ms)
            }

            Event::UserActivity { now_ms, .. } => {
                // Ending an inactive span must not credit the idle gap:
                // accrual resumes exactly at the reactivation timestamp.
                let was_active = is_active(
                    state.last_activity_ms(),
                    now_ms,
                    state.near_edges(),
                    &self.cfg,
                );
                if !was_active {
                    state.roll_open_forward(now_ms);
                }

                state.note_activity(now_ms);
                Vec::new()
            }

            Event::Tick { now_ms, page } => {
                state.set_near_edges(near_page_edges(&page, &self.cfg));

                let active = is_active(
                    state.last_activity_ms(),
                    now_ms,
                    state.near_edges(),
                    &self.cfg,
                );

                if !active {
                    // The clock pauses in place: nothing closes, nothing
                    // accrues. The open marks keep moving so a flush
                    // mid-inactivity cannot fold idle time in.
                    state.roll_open_forward(now_ms);
                    return Vec::new();
                }

                // Fold elapsed active time into the totals, then reconcile
                // against a fresh sampler read.
                state.fold_open(now_ms);
                self.reconcile(state, &page, now_ms)
            }

            Event::Unload { now_ms } => {
                // Regardless of activity state; no dangling interval
                // survives the session. A second flush is a no-op.
                state.flush(now_ms);
                Vec::new()
            }
        }
    }

    /// Reconcile the tracked state against the currently visible set:
    /// close entries no visible node maps to, open (or create) entries
    /// for every visible node, then report to the debug sink.
    fn reconcile(&self, state: &mut SessionState, page: &PageSnapshot, now_ms: u64) -> Vec<Action> {
        let visible = visible_nodes(page, self.cfg.active_zone_fraction);

        let mut keep = HashSet::new();
        for node in &visible {
            keep.insert(state.log_for_node(node.id, &node.text));
        }

        state.close_open_except(&keep, now_ms);

        for lid in &keep {
            state.log_mut(*lid).reopen(now_ms);
        }

        if !self.cfg.debug {
            return Vec::new();
        }

        vec![
            Action::ClearHighlights,
            Action::Highlight {
                ids: visible.iter().map(|n| n.id).collect(),
            },
            Action::RenderOverlay {
                model: OverlayModel::build(state, &visible),
            },
        ]
    }
}
