//! Document store adapter
//!
//! Everything that talks to the external managed document store lives here:
//! the HTTP client for document writes, and the live ordered subscription
//! that feeds the board.

pub mod client;
pub mod subscription;

pub use client::{DocumentStoreClient, StoreError, VehicleWriter, CUSTOMER_NAME_ORDER};
pub use subscription::{subscribe, Subscription};
