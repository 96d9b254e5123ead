//! Post controller.

use crate::{
    extractors::ValidatedJson,
    responses::{created, done, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use quill_core::{Post, PostId, QuillError};
use quill_service::{CreatePostRequest, CreatePostsRequest, ReplacePostRequest, UpdatePostRequest};
use tracing::debug;

/// Creates the post router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/batch", post(create_posts))
        .route(
            "/:id",
            get(get_post)
                .put(replace_post)
                .patch(update_post)
                .delete(delete_post),
        )
}

/// List every post.
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts", body = [Post]),
        (status = 500, description = "Store failure", body = quill_core::ErrorResponse)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Vec<Post>> {
    debug!("List posts request");

    let posts = state.post_service.list_posts().await?;
    ok(posts, "successfully retrieved posts")
}

/// Create a post.
#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Invalid request", body = quill_core::ErrorResponse)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Post>>), AppError> {
    debug!("Create post request for user {}", request.user_id);

    let post = state.post_service.create_post(request).await?;
    Ok(created(post, "post created successfully"))
}

/// Create several posts for one user in a single transaction.
#[utoipa::path(
    post,
    path = "/posts/batch",
    tag = "posts",
    request_body = CreatePostsRequest,
    responses(
        (status = 201, description = "Posts created", body = [Post]),
        (status = 400, description = "Invalid request", body = quill_core::ErrorResponse)
    )
)]
pub async fn create_posts(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<Post>>>), AppError> {
    debug!(
        "Create {} posts request for user {}",
        request.posts.len(),
        request.user_id
    );

    let posts = state.post_service.create_posts(request).await?;
    Ok(created(posts, "posts created successfully"))
}

/// Get a post by ID.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 400, description = "Invalid ID", body = quill_core::ErrorResponse),
        (status = 404, description = "Post not found", body = quill_core::ErrorResponse)
    )
)]
pub async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Post> {
    debug!("Get post request: {}", id);

    let post_id = parse_post_id(&id)?;
    let post = state.post_service.get_post(post_id).await?;
    ok(post, "successfully retrieved post")
}

/// Replace every field of a post.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post ID")),
    request_body = ReplacePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 404, description = "Post not found", body = quill_core::ErrorResponse)
    )
)]
pub async fn replace_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReplacePostRequest>,
) -> ApiResult<Post> {
    debug!("Replace post request: {}", id);

    let post_id = parse_post_id(&id)?;
    let post = state
        .post_service
        .update_post(post_id, UpdatePostRequest::from(request))
        .await?;
    ok(post, "post updated successfully")
}

/// Update only the supplied fields of a post.
#[utoipa::path(
    patch,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 404, description = "Post not found", body = quill_core::ErrorResponse)
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Post> {
    debug!("Update post request: {}", id);

    let post_id = parse_post_id(&id)?;
    let post = state.post_service.update_post(post_id, request).await?;
    ok(post, "post updated successfully")
}

/// Delete a post.
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = u64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 400, description = "Invalid ID", body = quill_core::ErrorResponse)
    )
)]
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    debug!("Delete post request: {}", id);

    let post_id = parse_post_id(&id)?;
    state.post_service.delete_post(post_id).await?;
    done("post deleted successfully")
}

fn parse_post_id(id: &str) -> Result<PostId, AppError> {
    PostId::parse(id).map_err(|_| AppError(QuillError::validation(format!("Invalid ID: {id}"))))
}
