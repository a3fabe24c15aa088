// src/handlers/stats.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{error::AppError, ledger::CommentLedger, stats};

/// All users ranked by score.
pub async fn get_leaderboard(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(stats::leaderboard(&pool).await?))
}

pub async fn get_overview(
    State(pool): State<SqlitePool>,
    State(ledger): State<CommentLedger>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(stats::overview(&pool, &ledger).await?))
}

/// Comment count per author.
pub async fn get_comment_stats(State(ledger): State<CommentLedger>) -> impl IntoResponse {
    Json(stats::comment_stats(&ledger).await)
}

/// Full answer log, most recent first.
pub async fn get_answer_records(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(stats::answer_records(&pool).await?))
}
