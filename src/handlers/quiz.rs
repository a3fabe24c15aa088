// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    answers,
    error::AppError,
    models::quiz::{QuizCatalog, SubmitAnswerRequest},
    stats,
    utils::extract::ValidatedJson,
};

/// Lists every quiz, options included.
pub async fn list_quizzes(State(quizzes): State<Arc<QuizCatalog>>) -> impl IntoResponse {
    Json(quizzes.all().into_iter().cloned().collect::<Vec<_>>())
}

/// Retrieves a single quiz by ID.
pub async fn get_quiz(
    State(quizzes): State<Arc<QuizCatalog>>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = quizzes
        .get(&quiz_id)
        .cloned()
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    Ok(Json(quiz))
}

/// Submits one answer.
///
/// * Scores it against the quiz's correct option.
/// * When both `userName` and `userId` are given, stores the record and
///   updates the user and quiz tallies in one transaction.
pub async fn submit_answer(
    State(pool): State<SqlitePool>,
    State(quizzes): State<Arc<QuizCatalog>>,
    ValidatedJson(req): ValidatedJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = answers::submit(&pool, &quizzes, &req).await?;
    Ok(Json(result))
}

/// Answer tally for one quiz. Unknown ids report zeros.
pub async fn get_quiz_stats(
    State(pool): State<SqlitePool>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(stats::quiz_stats(&pool, &quiz_id).await?))
}
