//! Router table and serve loop.

use crate::handlers;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use library_core::{Author, Book, CatalogService, Category, StoredEntity};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use tokio::net::TcpListener;

/// Shared application state.
///
/// Holds the process-wide store handle; cloning shares the same connection.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }
}

/// Builds the catalog router.
///
/// Books occupy the root path; the static `/author` and `/category`
/// segments take precedence over the root `/{id}` capture.
pub fn build_app(state: AppState) -> Router {
    let router = Router::new();
    let router = resource_routes::<Author>(router, "/author", "/author/{id}");
    let router = resource_routes::<Category>(router, "/category", "/category/{id}");
    let router = resource_routes::<Book>(router, "/", "/{id}");

    router
        .with_state(state)
        .layer(middleware::from_fn(log_requests))
}

fn resource_routes<E>(
    router: Router<AppState>,
    collection: &str,
    item: &str,
) -> Router<AppState>
where
    E: StoredEntity + Serialize,
    E::Draft: DeserializeOwned,
{
    router
        .route(
            collection,
            get(handlers::list::<E>).post(handlers::create::<E>),
        )
        .route(
            item,
            get(handlers::get::<E>)
                .put(handlers::update::<E>)
                .delete(handlers::delete::<E>),
        )
}

async fn log_requests(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    info!(
        "event=http_request module=server method={} path={} status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

/// Serves the catalog on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!("event=server_start module=server status=ok addr={addr}");

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok addr={addr}");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("event=shutdown_signal module=server status=ok"),
        Err(err) => {
            error!("event=shutdown_signal module=server status=error error={err}");
            // Without a signal handler the server runs until killed.
            std::future::pending::<()>().await;
        }
    }
}
