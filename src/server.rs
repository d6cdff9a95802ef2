//! HTTP search server.
//!
//! Exposes the verse search as a JSON API. The page that submits the
//! paragraph and renders the results lives outside this crate; it only
//! needs the two views below.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/search?q=<text>&threshold=<float>` | Run a search (`similitud` is accepted for `threshold`) |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Views
//!
//! ```json
//! { "status": "found", "query": "amor", "threshold": 0.05,
//!   "results": [ { "similarity": 0.71, "text": "...", "book": "Juan", "chapter": 3, "verse": 16 } ] }
//! ```
//!
//! A blank `q`, a search with no candidates, or one with none above the
//! threshold returns `"status": "not_found"` with an empty `results` array
//! (still `200`). Only a request without `q` at all is rejected.
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "missing query parameter q" } }
//! ```
//!
//! Error codes: `bad_request` (400), `vectorization_failed` (422).

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Instrument};

use verse_finder_core::{SearchError, SearchOutcome};

use crate::config::Config;
use crate::search::{ResultRow, VerseSearch};

/// Starts the HTTP server on `[server].bind` and runs until terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let search = VerseSearch::from_config(config)?;
    let app = router(search);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, "verse search server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router around a search pipeline.
pub fn router(search: VerseSearch) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(handle_search))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(search)
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "vectorization_failed".to_string(),
            message: err.to_string(),
        }
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /search ============

/// Query string of `GET /search`.
///
/// `threshold` stays a raw string so that garbage falls back to the default
/// instead of rejecting the request. The search form sends it as
/// `similitud`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(alias = "similitud")]
    pub threshold: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum ViewStatus {
    Found,
    NotFound,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    status: ViewStatus,
    query: String,
    threshold: f64,
    results: Vec<ResultRow>,
}

async fn handle_search(
    State(search): State<VerseSearch>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    // A blank `q` is a search with no words and renders the not-found view.
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .map(str::to_string)
        .ok_or_else(|| bad_request("missing query parameter q"))?;

    let threshold = search.threshold(params.threshold.as_deref());
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("search", %request_id, threshold);

    let outcome = search.run(&query, threshold).instrument(span).await?;

    let (status, results) = match outcome {
        SearchOutcome::Found(results) => (
            ViewStatus::Found,
            results.iter().map(ResultRow::from).collect(),
        ),
        SearchOutcome::NotFound => (ViewStatus::NotFound, Vec::new()),
    };

    Ok(Json(SearchResponse {
        status,
        query,
        threshold,
        results,
    }))
}
