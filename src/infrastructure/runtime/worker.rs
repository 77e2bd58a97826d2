//! Poll worker - fetches the dashboard snapshot on a fixed interval
//!
//! The first tick fires immediately, so the dashboard fills as soon as
//! the app starts. Failed cycles publish a `Failed` event and nothing
//! else; the next scheduled tick is the retry.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use tokio::time::interval;

use crate::infrastructure::api::MessApi;
use crate::infrastructure::runtime::bridge::{PollerCommand, PollerEvent};

/// How often the worker checks for commands between poll ticks.
const COMMAND_TICK: Duration = Duration::from_millis(200);

/// Run the poll loop until a `Shutdown` command arrives.
pub async fn run_poll_worker(
    api: Box<dyn MessApi>,
    every: Duration,
    cmd_rx: Receiver<PollerCommand>,
    evt_tx: Sender<PollerEvent>,
) {
    let mut poll_tick = interval(every);
    let mut cmd_tick = interval(COMMAND_TICK);

    loop {
        tokio::select! {
            _ = poll_tick.tick() => {
                fetch_once(api.as_ref(), &evt_tx).await;
            }
            _ = cmd_tick.tick() => {
                while let Ok(cmd) = cmd_rx.try_recv() {
                    match cmd {
                        PollerCommand::Shutdown => return,
                        PollerCommand::Refresh => fetch_once(api.as_ref(), &evt_tx).await,
                    }
                }
            }
        }
    }
}

async fn fetch_once(api: &dyn MessApi, evt_tx: &Sender<PollerEvent>) {
    match api.fetch_dashboard().await {
        Ok(snapshot) => {
            let _ = evt_tx.send(PollerEvent::Snapshot(snapshot));
        }
        Err(err) => {
            let _ = evt_tx.send(PollerEvent::Failed {
                message: format!("{err:#}"),
            });
        }
    }
}
