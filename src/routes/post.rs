//! Community feed routes.

use axum::extract::State;

use playmate_model::{ApiResponse, Post, response::PostPage};

use tracing::instrument;

use crate::app::{AppError, AppJson, AppPath, AppState, error::AppErrorKind};

/// Lists the feed.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> AppJson<ApiResponse<PostPage>> {
    let posts = state.seed.posts().to_vec();

    AppJson(ApiResponse::new(PostPage {
        total: posts.len(),
        posts,
    }))
}

/// Shows a single post.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<u64>,
) -> Result<AppJson<ApiResponse<Post>>, AppError> {
    let post = state
        .seed
        .post(post_id)
        .cloned()
        .ok_or(AppErrorKind::PostNotFound { id: post_id })?;

    Ok(AppJson(ApiResponse::new(post)))
}
