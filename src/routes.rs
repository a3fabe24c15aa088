// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{comment, export, health, quiz, stats},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (comments, quizzes, stats, export) under `/api`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, quiz catalog, comment ledger).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let comment_routes = Router::new()
        .route("/", get(comment::list_comments).post(comment::create_comment))
        .route("/like", post(comment::like_comment))
        .route("/{id}", delete(comment::delete_comment));

    let quiz_routes = Router::new()
        .route("/", get(quiz::list_quizzes))
        .route("/answer", post(quiz::submit_answer))
        .route("/{id}", get(quiz::get_quiz))
        .route("/{id}/stats", get(quiz::get_quiz_stats));

    let stats_routes = Router::new()
        .route("/users", get(stats::get_leaderboard))
        .route("/overview", get(stats::get_overview))
        .route("/comments", get(stats::get_comment_stats))
        .route("/quiz-records", get(stats::get_answer_records));

    let export_routes = Router::new()
        .route("/quiz-records", get(export::download_records))
        .route("/auto-save", post(export::auto_save_records));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/comments", comment_routes)
        .nest("/api/quizzes", quiz_routes)
        .nest("/api/stats", stats_routes)
        .nest("/api/export", export_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
