//! HTTP surface for the revision store.
//!
//! - [`reply`] - Method handling independent of the HTTP stack
//! - [`router`] - Axum router answering every path

pub mod reply;
pub mod router;

pub use reply::{RevisionReply, CONTENT_TYPE};
pub use router::router;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{Result, RevisionPlateError};
use crate::revision::RevisionStore;

/// Load the revision file, bind `config.bind` and serve until `shutdown` resolves.
pub async fn serve<F>(config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = Arc::new(RevisionStore::new(&config.revision_file));

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| RevisionPlateError::Bind {
            addr: config.bind,
            source,
        })?;

    tracing::info!(
        "Serving {} on http://{}",
        store.path().display(),
        listener.local_addr()?
    );

    serve_listener(listener, store, shutdown).await
}

/// Serve `store` on an already bound listener until `shutdown` resolves.
pub async fn serve_listener<F>(
    listener: TcpListener,
    store: Arc<RevisionStore>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
