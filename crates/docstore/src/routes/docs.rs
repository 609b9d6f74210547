//! Document handlers. Each one checks for its required query parameter and
//! hands the rest to the store; no other validation happens here.
//!
//! Query strings are read as raw pairs: a repeated parameter resolves to its
//! first occurrence.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use docstoreapp::model::DocumentRecord;
use docstoreapp::store::StorageBackend;

use crate::error::AppError;
use crate::state::AppState;

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// First non-empty value of `param`, or a 400 naming it.
fn required(query: QueryPairs, param: &str) -> Result<String, AppError> {
    let Query(pairs) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    pairs
        .into_iter()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::missing_param(param))
}

/// GET /api/docs — every record, soft-deleted ones included.
pub async fn list_docs<B>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<DocumentRecord>>, AppError>
where
    B: StorageBackend + Send + 'static,
{
    let records = state.run(|store| store.list_all()).await?;
    Ok(Json(records))
}

/// POST /api/doc?name=<name> — the request body is the payload.
pub async fn create_doc<B>(
    State(state): State<AppState<B>>,
    query: QueryPairs,
    body: Bytes,
) -> Result<Json<DocumentRecord>, AppError>
where
    B: StorageBackend + Send + 'static,
{
    let name = required(query, "name")?;
    let record = state
        .run(move |store| store.create(&name, Vec::new(), &body))
        .await?;
    Ok(Json(record))
}

/// DELETE /api/doc?id=<id> — soft delete.
pub async fn delete_doc<B>(
    State(state): State<AppState<B>>,
    query: QueryPairs,
) -> Result<Json<DocumentRecord>, AppError>
where
    B: StorageBackend + Send + 'static,
{
    let id = required(query, "id")?;
    let record = state.run(move |store| store.delete(&id)).await?;
    Ok(Json(record))
}
