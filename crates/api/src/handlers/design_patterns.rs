//! Handlers for the design pattern resource.
//!
//! Every response, success or failure, uses the [`Envelope`] shape.
//! Malformed JSON bodies are rejected with 400 before the service is called.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sections_core::design_pattern::DesignPattern;

use crate::error::AppResult;
use crate::response::Envelope;
use crate::state::AppState;

/// Message returned on a successful delete.
pub const DELETED_MESSAGE: &str = "Design pattern deleted successfully";

/// GET /designpatterns/{id}
pub async fn get_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let pattern = state.design_patterns.get_by_id(&id).await?;

    Ok(Envelope::data(StatusCode::OK, pattern))
}

/// POST /designpatterns
///
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create_pattern(
    State(state): State<AppState>,
    payload: Result<Json<DesignPattern>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let pattern = state.design_patterns.create(input).await?;

    tracing::info!(id = %pattern.id, "Design pattern created");

    Ok(Envelope::data(StatusCode::CREATED, pattern))
}

/// PUT /designpatterns
///
/// The body's `id` selects the pattern to replace.
pub async fn update_pattern(
    State(state): State<AppState>,
    payload: Result<Json<DesignPattern>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let pattern = state.design_patterns.update(input).await?;

    tracing::info!(id = %pattern.id, "Design pattern updated");

    Ok(Envelope::data(StatusCode::OK, pattern))
}

/// DELETE /designpatterns/{id}
pub async fn delete_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.design_patterns.delete(&id).await?;

    tracing::info!(%id, "Design pattern deleted");

    Ok(Envelope::message(StatusCode::OK, DELETED_MESSAGE))
}
