//! Poller bridge - connects the sync TUI thread with the async poll worker
//!
//! The TUI thread never awaits anything; it drains `poll_events` once
//! per frame. The worker lives on its own thread with its own Tokio
//! runtime and keeps polling until told to shut down.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::domain::DashboardSnapshot;
use crate::infrastructure::api::MessApi;
use crate::infrastructure::runtime::worker::run_poll_worker;

/// Commands sent from the TUI to the poll worker
#[derive(Debug, Clone, Copy)]
pub enum PollerCommand {
    /// Fetch now, outside the fixed schedule
    Refresh,
    /// Stop the worker
    Shutdown,
}

/// Events sent from the poll worker to the TUI
#[derive(Debug, Clone)]
pub enum PollerEvent {
    /// A decoded snapshot; fully replaces the rendered state
    Snapshot(DashboardSnapshot),
    /// The cycle was skipped (transport, status or decode failure)
    Failed { message: String },
}

/// Bridge between the sync TUI thread and the async poll worker
pub struct PollerBridge {
    cmd_tx: Sender<PollerCommand>,
    evt_rx: Receiver<PollerEvent>,
}

impl PollerBridge {
    /// Spawn the worker thread polling `api` every `every`.
    pub fn new(api: Box<dyn MessApi>, every: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<PollerCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<PollerEvent>();

        thread::spawn(move || match Runtime::new() {
            Ok(rt) => rt.block_on(run_poll_worker(api, every, cmd_rx, evt_tx)),
            Err(err) => {
                let _ = evt_tx.send(PollerEvent::Failed {
                    message: format!("poll runtime failed to start: {err}"),
                });
            }
        });

        Self { cmd_tx, evt_rx }
    }

    /// Send a command to the worker
    pub fn send(&self, cmd: PollerCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("poll worker channel closed"))
    }

    /// Drain pending events (non-blocking)
    pub fn poll_events(&self) -> Vec<PollerEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for PollerBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(PollerCommand::Shutdown);
    }
}
