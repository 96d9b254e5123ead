//! Post-related DTOs.

use quill_core::validation::rules::not_blank;
use quill_core::{NewPost, PostPatch, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a single post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Content is required"))]
    pub content: String,

    pub user_id: UserId,
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        NewPost::new(request.title, request.content, request.user_id)
    }
}

/// One post inside a batch creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PostItem {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Content is required"))]
    pub content: String,
}

/// Request to create several posts for one owner in a single transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostsRequest {
    pub user_id: UserId,

    #[validate(length(min = 1, message = "At least one post is required"), nested)]
    pub posts: Vec<PostItem>,
}

impl CreatePostsRequest {
    /// Expands the batch into one insert payload per item, all owned by `user_id`.
    #[must_use]
    pub fn into_new_posts(self) -> Vec<NewPost> {
        let user_id = self.user_id;
        self.posts
            .into_iter()
            .map(|item| NewPost::new(item.title, item.content, user_id))
            .collect()
    }
}

/// Sparse post update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title cannot be blank"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Content cannot be blank"))]
    pub content: Option<String>,

    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(request: UpdatePostRequest) -> Self {
        PostPatch {
            title: request.title,
            content: request.content,
            user_id: request.user_id,
        }
    }
}

/// Full post replacement: every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplacePostRequest {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Content is required"))]
    pub content: String,

    pub user_id: UserId,
}

impl From<ReplacePostRequest> for UpdatePostRequest {
    fn from(request: ReplacePostRequest) -> Self {
        Self {
            title: Some(request.title),
            content: Some(request.content),
            user_id: Some(request.user_id),
        }
    }
}
