use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Json,
};
use feedback_admin_shared::{FeedbackPage, FeedbackQuery};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub feedbacks: usize,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: status.as_u16(),
        }),
    )
}

/// `GET /api/feedbacks?page&size&sort&order`
///
/// Bad parameter values fall back to their defaults; only a query string that
/// cannot be decoded at all is rejected.
pub async fn list_feedbacks(
    State(state): State<AppState>,
    query: Result<Query<FeedbackQuery>, QueryRejection>,
) -> Result<Json<FeedbackPage>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::warn!("Rejected feedback query: {}", rejection.body_text());
        error_response(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;
    let request = query.to_request();
    let page = state.page(&request).await;

    tracing::debug!(
        page = request.page,
        size = request.size,
        sort = %request.sort,
        order = %request.order,
        returned = page.list.len(),
        total_pages = page.total_pages,
        "served feedback page"
    );

    Ok(Json(page))
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        feedbacks: state.feedback_count().await,
    })
}

pub async fn not_found() -> ApiError {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
