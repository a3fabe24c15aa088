// src/answers.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    config::SCORE_PER_CORRECT,
    error::AppError,
    models::{
        answer::NewAnswer,
        quiz::{AnswerResult, Quiz, QuizCatalog, SubmitAnswerRequest},
    },
    store,
};

pub const CORRECT_MESSAGE: &str = "Correct!";
pub const WRONG_MESSAGE: &str = "Not quite, try again";

/// Outcome of checking one selected label against a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub is_correct: bool,
    pub correct_label: String,
}

/// Compares `selected` with the quiz's single correct option.
///
/// Fails with `BadRequest` when the label is not one of the quiz's options
/// or when the quiz does not have exactly one correct option.
pub fn evaluate(quiz: &Quiz, selected: &str) -> Result<Evaluation, AppError> {
    let correct = quiz.correct_option();
    let chosen = quiz.option(selected);

    match (correct, chosen) {
        (Some(correct), Some(chosen)) => Ok(Evaluation {
            is_correct: chosen.label == correct.label,
            correct_label: correct.label.clone(),
        }),
        (None, _) => {
            tracing::warn!("Quiz {} has no single correct option", quiz.id);
            Err(AppError::BadRequest("Invalid option".to_string()))
        }
        (_, None) => Err(AppError::BadRequest(format!(
            "Invalid option {:?} for quiz {}",
            selected, quiz.id
        ))),
    }
}

/// Display name and id of the submitter, when both are present and non-blank.
pub fn identity(user_name: Option<&str>, user_id: Option<&str>) -> Option<(String, String)> {
    let name = user_name.map(str::trim).filter(|s| !s.is_empty())?;
    let id = user_id.map(str::trim).filter(|s| !s.is_empty())?;
    Some((name.to_string(), id.to_string()))
}

/// Scores a submission and, for identified users, persists it.
///
/// Anonymous submissions are scored for feedback only: nothing is written,
/// so question tallies always equal the number of stored answer records.
pub async fn submit(
    pool: &SqlitePool,
    catalog: &QuizCatalog,
    req: &SubmitAnswerRequest,
) -> Result<AnswerResult, AppError> {
    let quiz = catalog
        .get(&req.quiz_id)
        .ok_or_else(|| AppError::NotFound(format!("Quiz {} not found", req.quiz_id)))?;

    let evaluation = evaluate(quiz, &req.selected_option)?;

    match identity(req.user_name.as_deref(), req.user_id.as_deref()) {
        Some((user_name, user_id)) => {
            let answer = NewAnswer {
                quiz_id: quiz.id.clone(),
                user_id,
                user_name,
                selected_option: req.selected_option.clone(),
                is_correct: evaluation.is_correct,
                answered_at: Utc::now(),
            };
            store::record_answer(pool, &answer, SCORE_PER_CORRECT)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to record answer: {:?}", e);
                    AppError::InternalServerError(e.to_string())
                })?;
            tracing::debug!(
                "Recorded answer from {} to {} (correct: {})",
                answer.user_name,
                answer.quiz_id,
                answer.is_correct
            );
        }
        None => {
            tracing::debug!("Anonymous answer to {} scored without persisting", quiz.id);
        }
    }

    let message = if evaluation.is_correct {
        CORRECT_MESSAGE
    } else {
        WRONG_MESSAGE
    };

    Ok(AnswerResult {
        is_correct: evaluation.is_correct,
        correct_answer: evaluation.correct_label,
        message: message.to_string(),
    })
}
