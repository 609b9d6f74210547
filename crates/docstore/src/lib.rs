//! # docstore — HTTP Gateway
//!
//! A thin axum adapter over [`docstoreapp::DocumentStore`]: it turns query
//! parameters and request bodies into store calls and store results into
//! JSON. See [`routes`] for the endpoint table.
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → DefaultBodyLimit → Handler
//! ```

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use docstoreapp::store::StorageBackend;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Version string served by `GET /api/version`.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Assemble the application router.
pub fn app<B>(state: AppState<B>) -> Router
where
    B: StorageBackend + Send + 'static,
{
    routes::router::<B>()
        .layer(DefaultBodyLimit::max(state.max_payload_bytes()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
