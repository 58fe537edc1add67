//! Serve mode: an HTTP file server over the input directory that
//! regenerates the output every time it is requested.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::Error;
use crate::job::GenerateJob;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8101";

#[derive(Clone)]
struct ServeState {
    job: Arc<GenerateJob>,
    output_name: String,
}

/// Expand a bare `:port` into an address on every interface.
pub fn listen_addr(listen: &str) -> String {
    if listen.starts_with(':') {
        format!("0.0.0.0{listen}")
    } else {
        listen.to_string()
    }
}

/// Whether a request path asks for the generated output file.
pub fn requests_output(path: &str, output_name: &str) -> bool {
    let requested = path.trim_start_matches('/');
    requested == output_name || (requested.is_empty() && output_name == "index.html")
}

/// File server over `dir` that regenerates `job`'s output before serving it.
pub fn router(dir: PathBuf, job: GenerateJob) -> Router {
    let output_name = job
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let state = ServeState {
        job: Arc::new(job),
        output_name,
    };
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(middleware::from_fn_with_state(state, regenerate_on_request))
        .layer(TraceLayer::new_for_http())
}

async fn regenerate_on_request(
    State(state): State<ServeState>,
    req: Request,
    next: Next,
) -> Response {
    if requests_output(req.uri().path(), &state.output_name) {
        let job = Arc::clone(&state.job);
        match tokio::task::spawn_blocking(move || job.run()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) if e.is_fault() => {
                tracing::error!("{e}");
                return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
            }
            // Stale output is still served; the log says why.
            Ok(Err(e)) => tracing::warn!("{e}; serving the previous output"),
            Err(e) => {
                tracing::error!("generation task failed: {e}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    }
    next.run(req).await
}

/// Generate once, then serve `dir` on `listen` until the process ends.
pub async fn serve(dir: PathBuf, listen: &str, job: GenerateJob) -> Result<(), Error> {
    match job.run() {
        Ok(()) => {}
        Err(e) if e.is_fault() => return Err(e),
        Err(e) => tracing::warn!("{e}; fix the graph and reload the page"),
    }

    let listener = tokio::net::TcpListener::bind(listen_addr(listen)).await?;
    tracing::info!(
        dir = %dir.display(),
        addr = %listener.local_addr()?,
        "serving (ctrl-c to quit)"
    );
    axum::serve(listener, router(dir, job)).await?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/rust/test_serve.rs"]
mod tests;
