//! HTTP route handlers.

use std::path::Path;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::Coordinate;
use crate::geocode::GeocodeError;
use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the front-end assets; its `index.html` is
/// served at `/`.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .route("/health", get(health))
        .route("/buscar_lugar", get(find_place))
        .route("/api/places", get(find_place))
        .route("/calcular_ruta", post(plan_trip))
        .route("/api/trips", post(plan_trip))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve a place name to a position.
async fn find_place(
    State(state): State<AppState>,
    Query(req): Query<PlaceSearchRequest>,
) -> Result<Json<PlaceSearchResponse>, AppError> {
    let query = req.q.unwrap_or_default();
    let position = state.geocoder.find_place(&query).await?;

    Ok(Json(PlaceSearchResponse {
        lat: position.latitude,
        lon: position.longitude,
    }))
}

/// Plan every travel option between two points.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanTripResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(&body), "invalid trip request: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let start = parse_point("start", req.start)?;
    let end = parse_point("end", req.end)?;

    let result = state.planner.plan(start, end).await?;

    Ok(Json(PlanTripResponse::from(&result)))
}

fn parse_point(field: &str, pair: [f64; 2]) -> Result<Coordinate, AppError> {
    Coordinate::try_from(pair).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {field} point: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::EmptyQuery => AppError::BadRequest {
                message: e.to_string(),
            },
            GeocodeError::NotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            GeocodeError::Http(_) | GeocodeError::Api { .. } | GeocodeError::Json { .. } => {
                AppError::Upstream {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
