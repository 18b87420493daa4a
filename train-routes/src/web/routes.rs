//! HTTP route handlers.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};

use crate::ui::render_route;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(find_route))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let stations = state.router.len();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, stations, "Route finder listening");

    axum::serve(listener, app).await
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every known station.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .router
        .stations()
        .iter()
        .map(|s| s.to_string())
        .collect();

    Json(StationsResponse { stations })
}

/// Fastest route between two stations.
async fn find_route(
    State(state): State<AppState>,
    query: Result<Query<RouteRequest>, QueryRejection>,
) -> Result<Json<RouteResult>, AppError> {
    let Query(req) = query.map_err(|rejection| AppError::BadRequest {
        message: rejection.body_text(),
    })?;
    let from = req.from.trim();
    let to = req.to.trim();

    for point in [from, to] {
        if !state.router.is_valid_point(point) {
            return Err(AppError::BadRequest {
                message: format!("unknown station: {}", point),
            });
        }
    }

    let route = state
        .router
        .get_route(from, to)
        .ok_or_else(|| AppError::NotFound {
            message: render_route(from, to, None),
        })?;
    // Every stored route expands to a path.
    let path = state
        .router
        .path(from, to)
        .ok_or_else(|| AppError::Internal {
            message: format!("route from {} to {} has no path", from, to),
        })?;

    Ok(Json(RouteResult::from_route(from, to, &route, &path)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
