// tests/api_tests.rs

use quiz_backend::{config::Config, models::quiz::QuizCatalog, routes, state::AppState, store};
use serde_json::{Value, json};
use std::path::PathBuf;

struct TestApp {
    address: String,
    export_dir: PathBuf,
}

/// Helper function to spawn the app on a random port for testing.
/// Each app gets its own SQLite file and export directory under the temp dir.
async fn spawn_app() -> TestApp {
    let scratch = std::env::temp_dir().join(format!("quiz-api-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&scratch).expect("Failed to create scratch dir");

    let database_url = format!("sqlite://{}", scratch.join("quiz.db").display());
    let export_dir = scratch.join("exports");

    // 1. Create a pool and run migrations
    let pool = store::connect(&database_url)
        .await
        .expect("Failed to open test database");
    store::migrate(&pool).await.expect("Failed to migrate database");

    // 2. Create test configuration and state
    let config = Config {
        database_url,
        export_dir: export_dir.clone(),
        rust_log: "error".to_string(),
        ..Config::default()
    };
    let state = AppState::new(pool, config, QuizCatalog::builtin());

    // 3. Create the router with the app state
    let app = routes::create_router(state);

    // 4. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    // 5. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        export_dir,
    }
}

async fn answer(client: &reqwest::Client, app: &TestApp, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/api/quizzes/answer", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    client
        .get(url)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse json")
}

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let body = get_json(&client, format!("{}/health", app.address)).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/random_path_that_does_not_exist", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn quizzes_can_be_listed_and_fetched() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let all = get_json(&client, format!("{}/api/quizzes", app.address)).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["id"], "quiz_1");

    let quiz = get_json(&client, format!("{}/api/quizzes/quiz_1", app.address)).await;
    assert_eq!(quiz["options"].as_array().unwrap().len(), 4);
    assert_eq!(quiz["options"][1]["isCorrect"], true);

    let missing = client
        .get(format!("{}/api/quizzes/quiz_404", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn answering_updates_quiz_stats() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let right = answer(
        &client,
        &app,
        json!({"quizId": "quiz_1", "selectedOption": "B", "userName": "ada", "userId": "u1"}),
    )
    .await;
    assert_eq!(right.status().as_u16(), 200);
    let right: Value = right.json().await.unwrap();
    assert_eq!(right["isCorrect"], true);
    assert_eq!(right["correctAnswer"], "B");

    let wrong: Value = answer(
        &client,
        &app,
        json!({"quizId": "quiz_1", "selectedOption": "A", "userName": "bob", "userId": "u2"}),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(wrong["isCorrect"], false);
    assert_eq!(wrong["correctAnswer"], "B");

    let stats = get_json(&client, format!("{}/api/quizzes/quiz_1/stats", app.address)).await;
    assert_eq!(
        stats,
        json!({"correct": 1, "wrong": 1, "total": 2, "accuracy": 50.0})
    );
}

#[tokio::test]
async fn answer_errors_map_to_status_codes() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let unknown_quiz = answer(&client, &app, json!({"quizId": "nope", "selectedOption": "A"})).await;
    assert_eq!(unknown_quiz.status().as_u16(), 404);

    let bad_option = answer(&client, &app, json!({"quizId": "quiz_1", "selectedOption": "Z"})).await;
    assert_eq!(bad_option.status().as_u16(), 400);

    let malformed = client
        .post(format!("{}/api/quizzes/answer", app.address))
        .header("content-type", "application/json")
        .body("{\"quizId\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status().as_u16(), 400);

    let missing_field = answer(&client, &app, json!({"quizId": "quiz_1"})).await;
    assert_eq!(missing_field.status().as_u16(), 400);
}

#[tokio::test]
async fn unknown_quiz_is_not_found_whatever_the_field_lengths() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let bodies = [
        json!({"quizId": "x".repeat(51), "selectedOption": "A"}),
        json!({"quizId": "", "selectedOption": "A"}),
        json!({"quizId": "nope", "selectedOption": ""}),
        json!({"quizId": "nope", "selectedOption": "ABCDEFGHIJK"}),
    ];
    for body in bodies {
        let response = answer(&client, &app, body.clone()).await;
        assert_eq!(response.status().as_u16(), 404, "body: {}", body);
    }

    let long_option = answer(&client, &app, json!({"quizId": "quiz_1", "selectedOption": "ABCDEFGHIJK"})).await;
    assert_eq!(long_option.status().as_u16(), 400);
}

#[tokio::test]
async fn anonymous_answers_get_feedback_but_are_not_counted() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let result: Value = answer(&client, &app, json!({"quizId": "quiz_1", "selectedOption": "B"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(result["isCorrect"], true);

    let stats = get_json(&client, format!("{}/api/quizzes/quiz_1/stats", app.address)).await;
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["accuracy"], 0.0);

    let records = get_json(&client, format!("{}/api/stats/quiz-records", app.address)).await;
    assert!(records.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn leaderboard_and_overview_reflect_answers() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for (name, id, option) in [
        ("ada", "u1", "B"),
        ("ada", "u1", "B"),
        ("bob", "u2", "B"),
        ("bob", "u2", "C"),
        ("cy", "u3", "D"),
    ] {
        answer(
            &client,
            &app,
            json!({"quizId": "quiz_1", "selectedOption": option, "userName": name, "userId": id}),
        )
        .await;
    }

    let board = get_json(&client, format!("{}/api/stats/users", app.address)).await;
    let board = board.as_array().unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[0]["userName"], "ada");
    assert_eq!(board[0]["rank"], 1);
    assert_eq!(board[0]["score"], 20);
    assert_eq!(board[1]["userName"], "bob");
    assert_eq!(board[1]["accuracy"], 50.0);
    assert_eq!(board[2]["rank"], 3);
    assert_eq!(board[2]["score"], 0);

    let overview = get_json(&client, format!("{}/api/stats/overview", app.address)).await;
    assert_eq!(overview["totalUsers"], 3);
    assert_eq!(overview["totalAnswers"], 5);
    assert_eq!(overview["totalCorrect"], 3);
    assert_eq!(overview["overallAccuracy"], 60.0);
    assert_eq!(overview["totalComments"], 0);

    let records = get_json(&client, format!("{}/api/stats/quiz-records", app.address)).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["userName"], "cy");
    assert_eq!(records[0]["selectedOption"], "D");
}

#[tokio::test]
async fn comment_lifecycle() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/api/comments", app.address))
        .json(&json!({"userName": "ada", "content": "<script>x()</script>Great mix!"}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);
    let comment: Value = created.json().await.unwrap();
    let id = comment["id"].as_str().unwrap().to_string();
    assert_eq!(comment["content"], "Great mix!");
    assert_eq!(comment["likes"], 0);
    assert_eq!(comment["liked"], false);

    client
        .post(format!("{}/api/comments", app.address))
        .json(&json!({"userName": "bob", "content": "Agreed"}))
        .send()
        .await
        .unwrap();

    let list = get_json(&client, format!("{}/api/comments", app.address)).await;
    assert_eq!(list[0]["userName"], "bob");
    assert_eq!(list[1]["id"], id.as_str());

    let liked: Value = client
        .post(format!("{}/api/comments/like", app.address))
        .json(&json!({"commentId": id, "liked": true}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(liked, json!({"success": true, "likes": 1}));

    let unliked: Value = client
        .post(format!("{}/api/comments/like", app.address))
        .json(&json!({"commentId": id, "liked": false}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(unliked["likes"], 0);

    let missing = client
        .post(format!("{}/api/comments/like", app.address))
        .json(&json!({"commentId": "comment_missing", "liked": true}))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let counts = get_json(&client, format!("{}/api/stats/comments", app.address)).await;
    assert_eq!(counts.as_array().unwrap().len(), 2);

    for target in [id.as_str(), "comment_missing"] {
        let deleted: Value = client
            .delete(format!("{}/api/comments/{}", app.address, target))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(deleted["success"], true);
    }

    let list = get_json(&client, format!("{}/api/comments", app.address)).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn comment_validation_rejects_empty_content() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/comments", app.address))
        .json(&json!({"userName": "ada", "content": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let only_script = client
        .post(format!("{}/api/comments", app.address))
        .json(&json!({"userName": "ada", "content": "<script>x()</script>"}))
        .send()
        .await
        .unwrap();
    assert_eq!(only_script.status().as_u16(), 400);

    let blank_name = client
        .post(format!("{}/api/comments", app.address))
        .json(&json!({"userName": "   ", "content": "hi"}))
        .send()
        .await
        .unwrap();
    assert_eq!(blank_name.status().as_u16(), 400);

    let comments = get_json(&client, format!("{}/api/comments", app.address)).await;
    assert!(comments.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn auto_save_with_no_records_reports_failure() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{}/api/export/auto-save", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No answer records to export");
    assert!(body.get("filepath").is_none());
}

#[tokio::test]
async fn empty_download_still_returns_a_workbook() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/export/quiz-records", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = response.headers()["content-disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"quiz_records_"));

    let bytes = response.bytes().await.unwrap();
    assert_eq!(&bytes[..2], b"PK");
    assert!(app.export_dir.exists());
}

#[tokio::test]
async fn auto_save_writes_into_export_dir() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    answer(
        &client,
        &app,
        json!({"quizId": "quiz_1", "selectedOption": "B", "userName": "ada", "userId": "u1"}),
    )
    .await;

    let body: Value = client
        .post(format!("{}/api/export/auto-save", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    let filepath = PathBuf::from(body["filepath"].as_str().unwrap());
    assert!(filepath.starts_with(&app.export_dir));
    assert!(filepath.exists());
}
