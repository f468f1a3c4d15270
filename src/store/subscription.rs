//! Live ordered subscription to the vehicles collection.
//!
//! One subscription per process lifetime: the shell acquires it at startup
//! and cancels it exactly once on the way out. The listener task consumes
//! the store's SSE listen stream, parses each pushed event into a complete
//! snapshot and publishes it on a watch channel. Snapshots are full
//! replacements; consumers never merge.
//!
//! There is no automatic reconnect. A failed stream is logged, the channel
//! is moved out of `Loading` (empty collection) if it was still there, and
//! the task ends; anything already on the board stays as last-known-good.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::models::vehicle::VehicleRecord;
use crate::state::BoardState;
use crate::store::client::{DocumentStoreClient, StoreError};

/// Cancellation handle for the live subscription.
///
/// `cancel` is idempotent and also runs on drop, so the listener task can
/// never outlive the handle.
#[derive(Debug)]
pub struct Subscription {
    handle: JoinHandle<()>,
    cancelled: AtomicBool,
}

impl Subscription {
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.handle.abort();
            info!("vehicle subscription cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Establish the live subscription and return its cancellation handle plus
/// the snapshot channel. The channel starts at `BoardState::Loading`.
pub fn subscribe(
    store: Arc<DocumentStoreClient>,
    order_key: &str,
) -> (Subscription, watch::Receiver<BoardState>) {
    let (tx, rx) = watch::channel(BoardState::Loading);
    let order_key = order_key.to_string();

    let handle = tokio::spawn(async move {
        run_listener(store, &order_key, &tx).await;
    });

    (
        Subscription {
            handle,
            cancelled: AtomicBool::new(false),
        },
        rx,
    )
}

async fn run_listener(
    store: Arc<DocumentStoreClient>,
    order_key: &str,
    board: &watch::Sender<BoardState>,
) {
    let response = match store.open_listen_stream(order_key).await {
        Ok(response) => response,
        Err(e) => {
            error!("vehicle subscription failed to open: {}", e);
            leave_loading(board);
            return;
        }
    };

    let mut stream = response.bytes_stream();
    let mut buffer = String::new();

    while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("vehicle subscription stream error: {}", e);
                leave_loading(board);
                return;
            }
        };

        buffer.push_str(&String::from_utf8_lossy(&bytes));
        for payload in drain_events(&mut buffer) {
            match serde_json::from_str::<Vec<VehicleRecord>>(&payload) {
                Ok(records) => {
                    debug!(count = records.len(), "vehicle snapshot received");
                    let _ = board.send(BoardState::Ready(records));
                }
                Err(e) => {
                    // Last-known-good stays on the board.
                    error!("discarding snapshot: {}", StoreError::Payload(e));
                }
            }
        }
    }

    error!("vehicle subscription stream closed by the store");
    leave_loading(board);
}

/// Stop showing the spinner regardless of outcome: an error before the first
/// snapshot yields an empty board, an error after it leaves the board stale.
fn leave_loading(board: &watch::Sender<BoardState>) {
    if matches!(*board.borrow(), BoardState::Loading) {
        let _ = board.send(BoardState::Ready(Vec::new()));
    }
}

/// Pull complete SSE events off the front of `buffer`, returning each
/// event's joined `data` payload. Incomplete trailing input stays buffered.
fn drain_events(buffer: &mut String) -> Vec<String> {
    let mut payloads = Vec::new();

    while let Some(end) = buffer.find("\n\n") {
        let event: String = buffer.drain(..end + 2).collect();

        let data_lines: Vec<&str> = event
            .lines()
            .filter_map(|line| line.strip_prefix("data:"))
            .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
            .collect();

        if !data_lines.is_empty() {
            payloads.push(data_lines.join("\n"));
        }
    }

    payloads
}
