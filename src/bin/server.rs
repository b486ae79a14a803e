use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, sse::{Event, Sse}},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::{convert::Infallible, sync::Arc};
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use tower_http::cors::CorsLayer;
use lol_cd_tracker::{CooldownTracker, LookupEvent, LookupWorker, TrackerConfig, TrackerError};

const DEFAULT_BIND: &str = "127.0.0.1:9922";

#[derive(Clone)]
struct AppState {
    tracker: CooldownTracker,
    worker: Arc<LookupWorker>,
}

#[derive(Deserialize)]
struct LookupRequest {
    summoner: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _guard = lol_cd_tracker::logging::init_logging();

    let config = TrackerConfig::load()?;
    tracing::info!("Platform {}, patch {}", config.platform, config.patch);
    let tracker = CooldownTracker::new(config)?;

    let (worker, _rx) = LookupWorker::start(tracker.clone());
    let state = AppState {
        tracker,
        worker: Arc::new(worker),
    };

    let app = Router::new()
        .route("/status", get(status_handler))
        .route("/cooldowns/{name}", get(cooldowns_handler))
        .route("/lookup/{name}", get(lookup_handler))
        .route("/lookups", post(submit_handler))
        .route("/lookups/events", get(lookup_events_handler))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let bind = std::env::var("TRACKER_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("Server running on http://{}", bind);
    axum::serve(listener, app).await?;

    Ok(())
}

fn error_response(e: TrackerError) -> axum::response::Response {
    let status = match &e {
        TrackerError::SummonerNotFound(_) | TrackerError::NotInGame => StatusCode::NOT_FOUND,
        TrackerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        TrackerError::Http(_) | TrackerError::ApiError { .. } | TrackerError::CatalogUnavailable(_) => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}

async fn status_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let config = state.tracker.client().config();
    Json(json!({
        "running": true,
        "platform": config.platform,
        "patch": config.patch,
        "locale": config.locale,
    }))
}

/// Plain-text report, the same string the CLI prints.
async fn cooldowns_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> String {
    state.tracker.run(&name).await
}

async fn lookup_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.tracker.lookup(&name).await {
        Ok(outcome) => (StatusCode::OK, Json(json!(outcome))).into_response(),
        Err(e) => error_response(e),
    }
}

async fn submit_handler(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> impl IntoResponse {
    match state.worker.submit(request.summoner.clone()).await {
        Ok(()) => (StatusCode::ACCEPTED, Json(json!({ "queued": request.summoner }))).into_response(),
        Err(e) => error_response(e),
    }
}

async fn lookup_events_handler(State(state): State<AppState>) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let rx = state.worker.subscribe();
    let stream = BroadcastStream::new(rx)
        .filter_map(|result: Result<LookupEvent, tokio_stream::wrappers::errors::BroadcastStreamRecvError>| {
            result.ok().map(|event| Ok(Event::default().data(json!(event).to_string())))
        });

    Sse::new(stream).keep_alive(axum::response::sse::KeepAlive::default())
}
