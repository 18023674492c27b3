//! Users endpoints.

use axum::extract::State;

use playmate_model::{ApiResponse, User};

use tracing::instrument;

use crate::app::{AppJson, AppState};

pub mod auth;

/// Returns the current user's details.
///
/// There are no sessions, so this is always the seeded user.
#[instrument(skip(state))]
pub async fn info(State(state): State<AppState>) -> AppJson<ApiResponse<User>> {
    AppJson(ApiResponse::new(state.seed.default_user().clone()))
}
