// License: MIT

//! Runtime layer: owns the clock, the poll loop, and the host surface
//! wiring. All accounting still happens inside the pure engine; this
//! module only feeds it.

use std::{
    future::Future,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::{
    sync::{Mutex, Notify},
    time::sleep,
};

use eyre::WrapErr;

use crate::core::{
    activity::is_active,
    config::TrackerConfig,
    events::{ActivityKind, Event},
    info::SessionInfo,
    state::SessionState,
    tracker::Tracker,
    utils::format_secs,
};
use crate::surface::{DebugSink, PageSurface};
use crate::{ddebug, dinfo};

/// One page-load-to-unload tracking session.
///
/// The session clock is milliseconds since construction, read off a
/// monotonic [`Instant`]; every event the engine sees carries it.
#[derive(Debug)]
pub struct Session {
    tracker: Tracker,
    state: Mutex<SessionState>,
    epoch: Instant,
    shutdown: Notify,
}

impl Session {
    pub fn new(cfg: TrackerConfig) -> eyre::Result<Arc<Self>> {
        let tracker = Tracker::new(cfg).wrap_err("invalid tracker configuration")?;

        Ok(Arc::new(Self {
            tracker,
            state: Mutex::new(SessionState::new(0)),
            epoch: Instant::now(),
            shutdown: Notify::new(),
        }))
    }

    pub fn config(&self) -> &TrackerConfig {
        self.tracker.config()
    }

    /// Milliseconds since the session began.
    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Handle for routing host input callbacks into the session.
    pub fn activity(self: &Arc<Self>) -> ActivityHandle {
        ActivityHandle {
            session: Arc::clone(self),
        }
    }

    /// Stop the poll loop. The final unload flush runs inside the loop
    /// before it returns, so no open interval survives.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Close every open interval now, without ending the session. The
    /// next active tick reopens intervals for whatever is visible.
    pub async fn flush(&self) {
        let now = self.now_ms();
        let mut state = self.state.lock().await;
        let _ = self.tracker.handle_event(&mut state, Event::Unload { now_ms: now });
    }

    /// Snapshot of the accumulated totals for host consumption.
    pub async fn info(&self) -> SessionInfo {
        let now = self.now_ms();
        let state = self.state.lock().await;

        let active = is_active(
            state.last_activity_ms(),
            now,
            state.near_edges(),
            self.tracker.config(),
        );

        SessionInfo::collect(&state, active)
    }
}

/// Routes qualifying host inputs (scroll, resize, pointer-move, key-down)
/// into the engine. Cheap to clone; one per listener is fine.
#[derive(Clone)]
pub struct ActivityHandle {
    session: Arc<Session>,
}

impl ActivityHandle {
    pub async fn note(&self, kind: ActivityKind) {
        let now = self.session.now_ms();
        let mut state = self.session.state.lock().await;

        let _ = self
            .session
            .tracker
            .handle_event(&mut state, Event::UserActivity { kind, now_ms: now });
    }
}

/// The driving loop: one immediate page-load reconciliation, then a
/// fixed-interval tick until shutdown, then the unload flush and the
/// end-of-session report.
pub fn spawn_poll_task<S, D>(
    session: Arc<Session>,
    surface: Arc<Mutex<S>>,
    sink: Arc<Mutex<D>>,
) -> impl Future<Output = ()> + Send
where
    S: PageSurface + 'static,
    D: DebugSink + 'static,
{
    async move {
        let interval = Duration::from_millis(session.tracker.config().poll_interval_ms);

        // First paint begins accounting without waiting a full interval.
        {
            let page = surface.lock().await.snapshot();
            let now = session.now_ms();

            let actions = {
                let mut state = session.state.lock().await;
                session
                    .tracker
                    .handle_event(&mut state, Event::PageLoaded { now_ms: now, page })
            };

            if !actions.is_empty() {
                let mut sink = sink.lock().await;
                for action in actions {
                    sink.apply(action);
                }
            }
        }

        dinfo!(
            "Dwell",
            "session started (poll interval {}ms, selectors: {})",
            interval.as_millis(),
            session.tracker.config().selector_list()
        );

        loop {
            tokio::select! {
                _ = sleep(interval) => {}
                _ = session.shutdown.notified() => break,
            }

            let page = surface.lock().await.snapshot();
            let now = session.now_ms();

            let actions = {
                let mut state = session.state.lock().await;
                session
                    .tracker
                    .handle_event(&mut state, Event::Tick { now_ms: now, page })
            };

            if !actions.is_empty() {
                let mut sink = sink.lock().await;
                for action in actions {
                    sink.apply(action);
                }
            }
        }

        // Unload: fold every open interval, then report totals.
        let now = session.now_ms();
        let mut state = session.state.lock().await;
        let _ = session
            .tracker
            .handle_event(&mut state, Event::Unload { now_ms: now });

        for log in state.logs() {
            dinfo!("Dwell", "{}: {}", log.label(), format_secs(log.total_secs()));
        }

        ddebug!("Dwell", "session ended");
    }
}
