// src/models/stats.rs

use serde::Serialize;

/// Answer tally for one quiz.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizStatsResponse {
    pub correct: i64,
    pub wrong: i64,
    pub total: i64,
    /// Percentage of correct answers, rounded to 2 decimals.
    pub accuracy: f64,
}

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_name: String,
    pub score: i64,
    pub correct: i64,
    pub wrong: i64,
    pub total: i64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_users: i64,
    pub total_comments: usize,
    pub total_answers: i64,
    pub total_correct: i64,
    pub overall_accuracy: f64,
}

/// Number of comments written by one author.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentCount {
    pub user_name: String,
    pub comment_count: usize,
}
