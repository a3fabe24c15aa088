// src/models/quiz.rs

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// One labeled choice of a quiz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    /// Short label the client submits, e.g. "A".
    pub label: String,
    pub text: String,
    pub is_correct: bool,
}

/// A multiple-choice question. Exactly one option is expected to be correct.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl Quiz {
    /// The single option flagged correct, or `None` when the definition is
    /// broken (zero or several correct options).
    pub fn correct_option(&self) -> Option<&QuizOption> {
        let mut correct = self.options.iter().filter(|o| o.is_correct);
        match (correct.next(), correct.next()) {
            (Some(option), None) => Some(option),
            _ => None,
        }
    }

    pub fn option(&self, label: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// Immutable set of quizzes, keyed by id. Listing keeps definition order.
#[derive(Debug, Clone, Default)]
pub struct QuizCatalog {
    quizzes: Vec<Quiz>,
    index: HashMap<String, usize>,
}

impl QuizCatalog {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        let mut index = HashMap::with_capacity(quizzes.len());
        for (i, quiz) in quizzes.iter().enumerate() {
            if quiz.correct_option().is_none() {
                tracing::warn!(
                    "Quiz {} does not have exactly one correct option; answers to it will be rejected",
                    quiz.id
                );
            }
            if index.insert(quiz.id.clone(), i).is_some() {
                tracing::warn!("Duplicate quiz id {}; the later definition wins", quiz.id);
            }
        }
        Self { quizzes, index }
    }

    /// Built-in catalog used when no quiz file is configured.
    pub fn builtin() -> Self {
        Self::new(vec![Quiz {
            id: "quiz_1".to_string(),
            question: "When recording in a small room, what does a long reverb time do to the sound?"
                .to_string(),
            options: vec![
                option("A", "Makes the sound cleaner and clearer", false),
                option("B", "Makes the sound muddy and blurred", true),
                option("C", "Strengthens the low end", false),
                option("D", "Raises the overall loudness", false),
            ],
        }])
    }

    /// Loads a JSON array of quizzes from `path`.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let quizzes: Vec<Quiz> = serde_json::from_str(raw)?;
        Ok(Self::new(quizzes))
    }

    pub fn get(&self, id: &str) -> Option<&Quiz> {
        self.index.get(id).map(|&i| &self.quizzes[i])
    }

    /// All quizzes in definition order, skipping ids that were redefined later.
    pub fn all(&self) -> Vec<&Quiz> {
        self.quizzes
            .iter()
            .enumerate()
            .filter(|(i, q)| self.index.get(&q.id) == Some(i))
            .map(|(_, q)| q)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn option(label: &str, text: &str, is_correct: bool) -> QuizOption {
    QuizOption {
        label: label.to_string(),
        text: text.to_string(),
        is_correct,
    }
}

/// DTO for submitting a single answer.
///
/// Unknown quiz ids (404) and labels (400) are rejected by the catalog lookup.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub quiz_id: String,
    pub selected_option: String,

    pub user_name: Option<String>,
    pub user_id: Option<String>,
}

/// Response body for an answer submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_answer: String,
    pub message: String,
}
