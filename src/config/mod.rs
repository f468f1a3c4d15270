//! Project configuration
//!
//! Environment-supplied identifiers for the document store and the
//! HTTP server's bind settings.

pub mod environment;

pub use environment::*;
