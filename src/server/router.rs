//! Axum routing for the revision endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Router;
use http::{Method, StatusCode, Uri};

use crate::revision::RevisionStore;

/// Build a router that answers every path and method from `store`.
pub fn router(store: Arc<RevisionStore>) -> Router {
    Router::new().fallback(serve_revision).with_state(store)
}

async fn serve_revision(
    State(store): State<Arc<RevisionStore>>,
    method: Method,
    uri: Uri,
) -> Response {
    let request_method = method.clone();
    let reply = match tokio::task::spawn_blocking(move || store.handle(&request_method)).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Revision lookup task failed: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::debug!("{} {} -> {}", method, uri.path(), reply.status_or_default());
    reply.into_response()
}
