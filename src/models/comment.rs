use serde::{Deserialize, Serialize};
use validator::Validate;

/// A free-text comment held in the in-memory ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Generated once on creation, e.g. `comment_3f2a9c0d1e4b`.
    pub id: String,
    pub user_name: String,
    pub content: String,
    /// Creation time formatted HH:MM.
    pub time: String,
    pub likes: u64,
    pub liked: bool,
}

/// DTO for creating a new comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "User name must be between 1 and 50 characters"
    ))]
    pub user_name: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Comment must be between 1 and 1000 characters"
    ))]
    pub content: String,
}

/// DTO for liking or unliking a comment.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeCommentRequest {
    #[validate(length(min = 1, message = "commentId must not be empty"))]
    pub comment_id: String,
    pub liked: bool,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: u64,
}
