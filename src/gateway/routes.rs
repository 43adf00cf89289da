//! HTTP route handlers.
//!
//! This module defines the HTTP API surface of the gateway. Each API route
//! issues exactly one backend call and relays whatever the backend answers.

use crate::{
    client::BackendReply,
    error::GatewayError,
    gateway::{
        messages::{
            BodyFields, HealthResponse, NullifierRequest, ResultsQuery, SessionCreateRequest,
            VoteSubmitRequest,
        },
        operation::Operation,
        state::AppState,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use serde::Serialize;
use std::path::Path as FsPath;
use tower_http::services::{ServeDir, ServeFile};
use tracing::warn;

/// Creates the router with the API endpoints and the health check.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(Operation::CreateSession.route(), post(create_session))
        .route(Operation::GenerateNullifier.route(), post(generate_nullifier))
        .route(Operation::SubmitVote.route(), post(submit_vote))
        .route(Operation::FetchResults.route(), get(fetch_results))
        .route("/health", get(handle_health))
}

/// Creates the full router: API endpoints plus static files from `static_dir`.
///
/// `GET /` serves `index.html`; other unmatched paths are looked up in the
/// directory and 404 when absent.
pub fn create_router(static_dir: impl AsRef<FsPath>) -> Router<AppState> {
    let static_dir = static_dir.as_ref();
    api_router()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
}

/// Handles `POST /api/session/create`.
pub async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let request = SessionCreateRequest::from(BodyFields::parse(state.format, &body));
    forward_post(&state, Operation::CreateSession, &request).await
}

/// Handles `POST /api/nullifier/generate`.
pub async fn generate_nullifier(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let request = NullifierRequest::from(BodyFields::parse(state.format, &body));
    forward_post(&state, Operation::GenerateNullifier, &request).await
}

/// Handles `POST /api/vote/submit`.
pub async fn submit_vote(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let request = VoteSubmitRequest::from(BodyFields::parse(state.format, &body));
    forward_post(&state, Operation::SubmitVote, &request).await
}

/// Handles `GET /api/results/{proposalId}` by forwarding the id as a query parameter.
///
/// A segment that does not decode to UTF-8 is answered with a 400 and never
/// reaches the backend.
pub async fn fetch_results(
    proposal_id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, GatewayError> {
    let operation = Operation::FetchResults;
    let Path(proposal_id) = proposal_id?;
    let query = ResultsQuery { proposal_id };

    let reply = state
        .backend
        .get(operation.backend_path(), &query)
        .await
        .map_err(|e| GatewayError::forward(operation, e))?;

    relay(&state, operation, reply)
}

/// Handles `GET /health` locally, without contacting the backend.
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

async fn forward_post<T: Serialize>(
    state: &AppState,
    operation: Operation,
    payload: &T,
) -> Result<Response, GatewayError> {
    let reply = state
        .backend
        .post(operation.backend_path(), payload)
        .await
        .map_err(|e| GatewayError::forward(operation, e))?;

    relay(state, operation, reply)
}

/// Relays a completed backend exchange at 200, whatever the backend's own status.
fn relay(
    state: &AppState,
    operation: Operation,
    reply: BackendReply,
) -> Result<Response, GatewayError> {
    if !reply.status.is_success() {
        warn!(%operation, status = %reply.status, "backend returned non-success status");
    }

    let body = state
        .format
        .relay(reply.body)
        .map_err(|e| GatewayError::forward(operation, e))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, state.format.content_type())],
        body,
    )
        .into_response())
}
