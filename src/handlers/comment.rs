// src/handlers/comment.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    ledger::CommentLedger,
    models::comment::{CreateCommentRequest, LikeCommentRequest, LikeResponse},
    utils::{extract::ValidatedJson, html::clean_html},
};

/// Create a new comment. It is placed at the head of the list.
pub async fn create_comment(
    State(ledger): State<CommentLedger>,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_name = payload.user_name.trim();
    if user_name.is_empty() {
        return Err(AppError::BadRequest("User name must not be blank".to_string()));
    }

    let content = clean_html(&payload.content);
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment has no content after sanitizing".to_string(),
        ));
    }

    let comment = ledger.create(user_name.to_string(), content).await;
    tracing::debug!("Created comment {} by {}", comment.id, comment.user_name);

    Ok((StatusCode::CREATED, Json(comment)))
}

/// List all comments, newest first.
pub async fn list_comments(State(ledger): State<CommentLedger>) -> impl IntoResponse {
    Json(ledger.list().await)
}

/// Like or unlike a comment.
pub async fn like_comment(
    State(ledger): State<CommentLedger>,
    ValidatedJson(payload): ValidatedJson<LikeCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let likes = ledger.set_like(&payload.comment_id, payload.liked).await?;

    Ok(Json(LikeResponse {
        success: true,
        likes,
    }))
}

/// Delete a comment. Unknown ids succeed as well.
pub async fn delete_comment(
    State(ledger): State<CommentLedger>,
    Path(comment_id): Path<String>,
) -> impl IntoResponse {
    if ledger.delete(&comment_id).await {
        tracing::debug!("Deleted comment {}", comment_id);
    }
    Json(serde_json::json!({ "success": true }))
}
