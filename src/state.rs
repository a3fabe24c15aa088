use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::{config::Config, ledger::CommentLedger, models::quiz::QuizCatalog};

/// Shared handler state. Cheap to clone: every field is a handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub quizzes: Arc<QuizCatalog>,
    pub comments: CommentLedger,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config, quizzes: QuizCatalog) -> Self {
        Self {
            pool,
            config,
            quizzes: Arc::new(quizzes),
            comments: CommentLedger::new(),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<QuizCatalog> {
    fn from_ref(state: &AppState) -> Self {
        state.quizzes.clone()
    }
}

impl FromRef<AppState> for CommentLedger {
    fn from_ref(state: &AppState) -> Self {
        state.comments.clone()
    }
}
