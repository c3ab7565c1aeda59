//! Plain static file server for the browser front-end, no calculations happen here.

use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::prelude::*;

#[instrument(skip_all, fields(bind_address = bind_address, root = %root.display()))]
pub async fn serve(bind_address: &str, root: PathBuf) -> Result {
    let listener =
        TcpListener::bind(bind_address).await.context("failed to bind to the address")?;
    info!(local_address = %listener.local_addr()?, "serving…");
    axum::serve(listener, router(root)).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

fn router(root: PathBuf) -> Router {
    Router::new()
        .fallback(serve_file)
        .with_state(Arc::new(root))
        .layer(TraceLayer::new_for_http())
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {error:#}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                error!("failed to listen for SIGTERM: {error:#}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down…");
}

async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let Some(path) = resolve(&root, uri.path()) else {
        return not_found();
    };
    match tokio::fs::read(&path).await {
        Ok(content) => ([(header::CONTENT_TYPE, content_type(&path))], content).into_response(),
        Err(error) if error.kind() == ErrorKind::NotFound => not_found(),
        Err(error) => {
            error!(path = %path.display(), "failed to read the file: {error:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Server error: {:?}", error.kind()))
                .into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

/// Map the request path onto the root directory, `/` being `index.html`.
///
/// Anything but plain path segments (`..`, absolute prefixes) is refused.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = match request_path.trim_start_matches('/') {
        "" => "index.html",
        relative => relative,
    };
    let relative = Path::new(relative);
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
        .then(|| root.join(relative))
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        _ => "text/html",
    }
}
