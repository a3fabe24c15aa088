// src/models/answer.rs

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Represents the 'quiz_records' table in the database.
/// One immutable row per identified answer submission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnswerRecord {
    pub id: i64,
    pub quiz_id: String,
    pub user_id: String,
    pub user_name: String,
    pub selected_option: String,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    /// Local wall-clock time of the answer, formatted HH:MM.
    pub fn clock_time(&self) -> String {
        self.answered_at.with_timezone(&Local).format("%H:%M").to_string()
    }

    /// Human-readable outcome used in listings and exports.
    pub fn result_label(&self) -> &'static str {
        if self.is_correct { "correct" } else { "incorrect" }
    }
}

/// Input for persisting an answer from an identified user.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub quiz_id: String,
    pub user_id: String,
    pub user_name: String,
    pub selected_option: String,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

/// Represents the 'user_scores' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserScore {
    pub id: i64,
    pub user_name: String,
    pub correct_count: i64,
    pub wrong_count: i64,
    pub total_score: i64,
    pub updated_at: DateTime<Utc>,
}

/// Represents the 'quiz_stats' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizStat {
    pub id: i64,
    pub quiz_id: String,
    pub correct_count: i64,
    pub wrong_count: i64,
    pub total_count: i64,
    pub updated_at: DateTime<Utc>,
}

/// Flattened answer log entry returned by the stats API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecordView {
    pub user_name: String,
    pub quiz_id: String,
    pub selected_option: String,
    pub is_correct: bool,
    pub time: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&AnswerRecord> for AnswerRecordView {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            user_name: record.user_name.clone(),
            quiz_id: record.quiz_id.clone(),
            selected_option: record.selected_option.clone(),
            is_correct: record.is_correct,
            time: record.clock_time(),
            timestamp: record.answered_at,
        }
    }
}
