// src/stats.rs

//! Read-only reports derived from the durable tallies and the comment ledger.

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    ledger::CommentLedger,
    models::{
        answer::{AnswerRecordView, UserScore},
        stats::{CommentCount, LeaderboardEntry, OverviewStats, QuizStatsResponse},
    },
    store,
    utils::percent::accuracy,
};

/// Tally for one quiz. Unknown or unanswered quizzes report zeros.
pub async fn quiz_stats(pool: &SqlitePool, quiz_id: &str) -> Result<QuizStatsResponse, AppError> {
    let (correct, wrong) = store::quiz_stat(pool, quiz_id)
        .await?
        .map(|s| (s.correct_count, s.wrong_count))
        .unwrap_or((0, 0));
    let total = correct + wrong;

    Ok(QuizStatsResponse {
        correct,
        wrong,
        total,
        accuracy: accuracy(correct, total),
    })
}

pub async fn leaderboard(pool: &SqlitePool) -> Result<Vec<LeaderboardEntry>, AppError> {
    let scores = store::ranked_user_scores(pool).await?;
    Ok(rank(scores))
}

/// Annotates already-ordered scores with their 1-based position.
fn rank(scores: Vec<UserScore>) -> Vec<LeaderboardEntry> {
    scores
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let total = s.correct_count + s.wrong_count;
            LeaderboardEntry {
                rank: i + 1,
                user_name: s.user_name,
                score: s.total_score,
                correct: s.correct_count,
                wrong: s.wrong_count,
                total,
                accuracy: accuracy(s.correct_count, total),
            }
        })
        .collect()
}

pub async fn overview(pool: &SqlitePool, ledger: &CommentLedger) -> Result<OverviewStats, AppError> {
    let total_users = store::user_count(pool).await?;
    let (total_answers, total_correct) = store::record_totals(pool).await?;

    Ok(OverviewStats {
        total_users,
        total_comments: ledger.len().await,
        total_answers,
        total_correct,
        overall_accuracy: accuracy(total_correct, total_answers),
    })
}

pub async fn comment_stats(ledger: &CommentLedger) -> Vec<CommentCount> {
    ledger.counts_by_author().await
}

/// Every stored answer, most recent first.
pub async fn answer_records(pool: &SqlitePool) -> Result<Vec<AnswerRecordView>, AppError> {
    let records = store::all_records(pool).await?;
    Ok(records.iter().map(AnswerRecordView::from).collect())
}
