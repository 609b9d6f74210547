//! # Routes
//!
//! | Method | Path           | Query  | Handler                 |
//! |--------|----------------|--------|-------------------------|
//! | GET    | `/api/version` |        | [`version::get_version`] |
//! | GET    | `/api/docs`    |        | [`docs::list_docs`]      |
//! | POST   | `/api/doc`     | `name` | [`docs::create_doc`]     |
//! | DELETE | `/api/doc`     | `id`   | [`docs::delete_doc`]     |

use axum::routing::get;
use axum::Router;
use docstoreapp::store::StorageBackend;

use crate::state::AppState;

pub mod docs;
pub mod version;

pub fn router<B>() -> Router<AppState<B>>
where
    B: StorageBackend + Send + 'static,
{
    Router::new()
        .route("/api/version", get(version::get_version))
        .route("/api/docs", get(docs::list_docs::<B>))
        .route(
            "/api/doc",
            axum::routing::post(docs::create_doc::<B>).delete(docs::delete_doc::<B>),
        )
}
