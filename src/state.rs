//! Shared application state
//!
//! The state handed to the axum router: a write handle to the document
//! store and the receiving side of the board's snapshot channel. The
//! adapter is an explicitly constructed instance owned by the shell and
//! injected here, never a process-wide singleton.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::vehicle::VehicleRecord;
use crate::store::client::VehicleWriter;

/// What the board currently knows about the vehicles collection.
///
/// `Loading` lasts until the first snapshot or the first subscription error;
/// after that the board only ever replaces one `Ready` collection with the
/// next. Each snapshot is the complete collection in store order.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    Loading,
    Ready(Vec<VehicleRecord>),
}

#[derive(Clone)]
pub struct AppState {
    pub writer: Arc<dyn VehicleWriter>,
    pub board: watch::Receiver<BoardState>,
}

impl AppState {
    pub fn new(writer: Arc<dyn VehicleWriter>, board: watch::Receiver<BoardState>) -> Self {
        Self { writer, board }
    }

    /// The most recent board snapshot (or `Loading` before the first one).
    pub fn current_board(&self) -> BoardState {
        self.board.borrow().clone()
    }
}
