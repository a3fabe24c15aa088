// src/ledger.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Local;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{comment::Comment, stats::CommentCount},
};

/// Process-lifetime list of comments, newest first.
///
/// Cloning shares the same list. Every mutation takes the write lock, so
/// concurrent likes, creates and deletes are applied one at a time.
#[derive(Debug, Clone, Default)]
pub struct CommentLedger {
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl CommentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a comment at the head of the list and returns it.
    pub async fn create(&self, user_name: String, content: String) -> Comment {
        let mut comments = self.comments.write().await;

        let mut id = new_comment_id();
        while comments.iter().any(|c| c.id == id) {
            id = new_comment_id();
        }

        let comment = Comment {
            id,
            user_name,
            content,
            time: Local::now().format("%H:%M").to_string(),
            likes: 0,
            liked: false,
        };
        comments.insert(0, comment.clone());
        comment
    }

    pub async fn list(&self) -> Vec<Comment> {
        self.comments.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }

    /// Applies a like (`true`) or unlike (`false`) and returns the new count.
    ///
    /// Repeating the same value is not deduplicated: two likes add two.
    /// Unlike never takes the count below zero.
    pub async fn set_like(&self, comment_id: &str, liked: bool) -> Result<u64, AppError> {
        let mut comments = self.comments.write().await;
        let comment = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if liked {
            comment.likes += 1;
        } else {
            comment.likes = comment.likes.saturating_sub(1);
        }
        comment.liked = liked;

        Ok(comment.likes)
    }

    /// Removes the comment with `comment_id`. Returns whether one was removed;
    /// an unknown id is not an error.
    pub async fn delete(&self, comment_id: &str) -> bool {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|c| c.id != comment_id);
        comments.len() != before
    }

    /// Comment count per author, highest first.
    pub async fn counts_by_author(&self) -> Vec<CommentCount> {
        count_by_author(&self.comments.read().await)
    }
}

fn new_comment_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("comment_{}", &hex[..12])
}

/// Groups comments by author. Ties keep the order each author first appears.
pub fn count_by_author(comments: &[Comment]) -> Vec<CommentCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for comment in comments {
        let entry = counts.entry(comment.user_name.as_str()).or_insert_with(|| {
            order.push(comment.user_name.as_str());
            0
        });
        *entry += 1;
    }

    let mut result: Vec<CommentCount> = order
        .into_iter()
        .map(|name| CommentCount {
            user_name: name.to_string(),
            comment_count: counts[name],
        })
        .collect();
    // stable: equal counts stay in first-appearance order
    result.sort_by(|a, b| b.comment_count.cmp(&a.comment_count));
    result
}
