//! CORS middleware
//!
//! The board is served and consumed from the same origin; the permissive
//! layer is for development setups where the page is proxied.

use tower_http::cors::CorsLayer;

/// NOTE: allows any origin - development only
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
