use crate::prelude::{eprintln, *};
use axum::{
    extract::State,
    response::sse::{Event, Sse},
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

const MESSAGE_PATH: &str = "/message";

pub async fn run_sse(options: super::cli::SseOptions, global: crate::Global) -> Result<()> {
    let addr = options.addr();

    if global.verbose {
        eprintln!("MCP server listening on http://{addr}");
        eprintln!("SSE endpoint: http://{addr}/sse");
        eprintln!("Message endpoint: http://{addr}{MESSAGE_PATH}");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, router(global))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(global: crate::Global) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/sse", get(sse_handler))
        .route(MESSAGE_PATH, post(message_handler))
        .layer(cors)
        .with_state(Arc::new(global))
}

/// Announce where clients should POST their requests
async fn sse_handler() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = stream::once(async { Ok(Event::default().event("endpoint").data(MESSAGE_PATH)) });
    Sse::new(stream)
}

async fn message_handler(
    State(global): State<Arc<crate::Global>>,
    Json(request): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let response = super::handle_request(&request.to_string(), &global).await;
    Json(serde_json::to_value(response).unwrap_or(serde_json::Value::Null))
}
