//! Poll worker data flow with a scripted API

use std::collections::VecDeque;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use messmate::domain::{DashboardSnapshot, LeaveStatus};
use messmate::infrastructure::{ApiError, MessApi, PollerBridge, PollerCommand, PollerEvent};
use reqwest::StatusCode;

struct ScriptedApi {
    responses: Mutex<VecDeque<Result<DashboardSnapshot, ApiError>>>,
}

impl ScriptedApi {
    fn new(responses: Vec<Result<DashboardSnapshot, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl MessApi for ScriptedApi {
    async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            // Once the script runs out, every further cycle fails.
            .unwrap_or(Err(ApiError::Status(StatusCode::GONE)))
    }
}

fn snapshot(pending_leaves: u32) -> DashboardSnapshot {
    DashboardSnapshot {
        bill: None,
        pending_leaves,
        latest_leave_status: LeaveStatus::None,
        notifications: Vec::new(),
    }
}

fn wait_for_events(bridge: &PollerBridge, want: usize, deadline: Duration) -> Vec<PollerEvent> {
    let start = Instant::now();
    let mut events = Vec::new();
    while events.len() < want && start.elapsed() < deadline {
        events.extend(bridge.poll_events());
        thread::sleep(Duration::from_millis(10));
    }
    events
}

#[test]
fn first_fetch_happens_immediately() {
    let api = ScriptedApi::new(vec![Ok(snapshot(2))]);
    // An hour-long interval: only the immediate first tick can fire.
    let bridge = PollerBridge::new(Box::new(api), Duration::from_secs(3600));

    let events = wait_for_events(&bridge, 1, Duration::from_secs(2));
    assert_eq!(events.len(), 1);
    match &events[0] {
        PollerEvent::Snapshot(snap) => assert_eq!(snap.pending_leaves, 2),
        other => panic!("expected a snapshot, got {other:?}"),
    }
}

#[test]
fn failed_cycle_is_reported_and_polling_continues() {
    let api = ScriptedApi::new(vec![
        Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
        Ok(snapshot(1)),
    ]);
    let bridge = PollerBridge::new(Box::new(api), Duration::from_millis(50));

    let events = wait_for_events(&bridge, 2, Duration::from_secs(2));
    assert!(events.len() >= 2);
    match &events[0] {
        PollerEvent::Failed { message } => assert!(message.contains("500")),
        other => panic!("expected a failure first, got {other:?}"),
    }
    match &events[1] {
        PollerEvent::Snapshot(snap) => assert_eq!(snap.pending_leaves, 1),
        other => panic!("expected a snapshot second, got {other:?}"),
    }
}

#[test]
fn decode_failure_counts_as_a_failed_cycle() {
    let decode_err = serde_json::from_str::<DashboardSnapshot>("not json").unwrap_err();
    let api = ScriptedApi::new(vec![Err(ApiError::Decode(decode_err))]);
    let bridge = PollerBridge::new(Box::new(api), Duration::from_secs(3600));

    let events = wait_for_events(&bridge, 1, Duration::from_secs(2));
    assert_eq!(events.len(), 1);
    match &events[0] {
        PollerEvent::Failed { message } => assert!(message.contains("malformed")),
        other => panic!("expected a failure, got {other:?}"),
    }
}

#[test]
fn refresh_command_fetches_out_of_schedule() {
    let api = ScriptedApi::new(vec![Ok(snapshot(0)), Ok(snapshot(5))]);
    let bridge = PollerBridge::new(Box::new(api), Duration::from_secs(3600));

    let first = wait_for_events(&bridge, 1, Duration::from_secs(2));
    assert_eq!(first.len(), 1);

    bridge.send(PollerCommand::Refresh).expect("send refresh");
    let second = wait_for_events(&bridge, 1, Duration::from_secs(2));
    assert_eq!(second.len(), 1);
    match &second[0] {
        PollerEvent::Snapshot(snap) => assert_eq!(snap.pending_leaves, 5),
        other => panic!("expected the refreshed snapshot, got {other:?}"),
    }
}

#[test]
fn shutdown_stops_the_worker() {
    let api = ScriptedApi::new(vec![Ok(snapshot(0))]);
    let bridge = PollerBridge::new(Box::new(api), Duration::from_millis(50));

    let _ = wait_for_events(&bridge, 1, Duration::from_secs(2));
    bridge.send(PollerCommand::Shutdown).expect("send shutdown");
    // Give the worker a moment to exit, then confirm the event stream dries up.
    thread::sleep(Duration::from_millis(300));
    let _ = bridge.poll_events();
    thread::sleep(Duration::from_millis(200));
    assert!(bridge.poll_events().is_empty());
}
