// src/store.rs

//! Durable tables: the answer log plus the two running tallies derived from it.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::models::answer::{AnswerRecord, NewAnswer, QuizStat, UserScore};

/// Opens a pool against `database_url`, creating the database file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

/// Applies the embedded migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Persists one answer and folds it into both tallies.
///
/// The record insert and the two upserts share one transaction. Any error
/// returns early and drops `tx`, which rolls the whole unit back.
pub async fn record_answer(
    pool: &SqlitePool,
    answer: &NewAnswer,
    score_per_correct: i64,
) -> Result<AnswerRecord, sqlx::Error> {
    let (correct, wrong) = if answer.is_correct { (1_i64, 0_i64) } else { (0, 1) };
    let score = correct * score_per_correct;

    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO quiz_records (quiz_id, user_id, user_name, selected_option, is_correct, answered_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&answer.quiz_id)
    .bind(&answer.user_id)
    .bind(&answer.user_name)
    .bind(&answer.selected_option)
    .bind(answer.is_correct)
    .bind(answer.answered_at)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    sqlx::query(
        r#"
        INSERT INTO user_scores (user_name, correct_count, wrong_count, total_score, updated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(user_name) DO UPDATE SET
            correct_count = correct_count + excluded.correct_count,
            wrong_count = wrong_count + excluded.wrong_count,
            total_score = total_score + excluded.total_score,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(&answer.user_name)
    .bind(correct)
    .bind(wrong)
    .bind(score)
    .bind(answer.answered_at)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO quiz_stats (quiz_id, correct_count, wrong_count, total_count, updated_at)
        VALUES (?, ?, ?, 1, ?)
        ON CONFLICT(quiz_id) DO UPDATE SET
            correct_count = correct_count + excluded.correct_count,
            wrong_count = wrong_count + excluded.wrong_count,
            total_count = total_count + 1,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(&answer.quiz_id)
    .bind(correct)
    .bind(wrong)
    .bind(answer.answered_at)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(AnswerRecord {
        id,
        quiz_id: answer.quiz_id.clone(),
        user_id: answer.user_id.clone(),
        user_name: answer.user_name.clone(),
        selected_option: answer.selected_option.clone(),
        is_correct: answer.is_correct,
        answered_at: answer.answered_at,
    })
}

pub async fn quiz_stat(pool: &SqlitePool, quiz_id: &str) -> Result<Option<QuizStat>, sqlx::Error> {
    sqlx::query_as::<_, QuizStat>(
        r#"
        SELECT id, quiz_id, correct_count, wrong_count, total_count, updated_at
        FROM quiz_stats
        WHERE quiz_id = ?
        "#,
    )
    .bind(quiz_id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
pub(crate) async fn user_score(pool: &SqlitePool, user_name: &str) -> Result<Option<UserScore>, sqlx::Error> {
    sqlx::query_as::<_, UserScore>(
        r#"
        SELECT id, user_name, correct_count, wrong_count, total_score, updated_at
        FROM user_scores
        WHERE user_name = ?
        "#,
    )
    .bind(user_name)
    .fetch_optional(pool)
    .await
}

/// All user tallies, highest score first. Equal scores keep arrival order.
pub async fn ranked_user_scores(pool: &SqlitePool) -> Result<Vec<UserScore>, sqlx::Error> {
    sqlx::query_as::<_, UserScore>(
        r#"
        SELECT id, user_name, correct_count, wrong_count, total_score, updated_at
        FROM user_scores
        ORDER BY total_score DESC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// The whole answer log, most recent first.
pub async fn all_records(pool: &SqlitePool) -> Result<Vec<AnswerRecord>, sqlx::Error> {
    sqlx::query_as::<_, AnswerRecord>(
        r#"
        SELECT id, quiz_id, user_id, user_name, selected_option, is_correct, answered_at
        FROM quiz_records
        ORDER BY answered_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// `(total records, correct records)` across the answer log.
pub async fn record_totals(pool: &SqlitePool) -> Result<(i64, i64), sqlx::Error> {
    sqlx::query_as::<_, (i64, i64)>(
        r#"
        SELECT
            COUNT(*),
            COALESCE(SUM(CASE WHEN is_correct THEN 1 ELSE 0 END), 0)
        FROM quiz_records
        "#,
    )
    .fetch_one(pool)
    .await
}

pub async fn user_count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_scores")
        .fetch_one(pool)
        .await
}
