//! OpenAPI documentation configuration.

use quill_core::{ErrorResponse, FieldError, Post, PostId, User, UserId};
use quill_service::{
    CreatePostRequest, CreatePostsRequest, CreateUserRequest, PostItem, ReplacePostRequest,
    UpdatePostRequest, UpdateUserRequest,
};
use utoipa::OpenApi;

use crate::controllers::HealthResponse;

/// OpenAPI documentation for the Quill API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quill API",
        version = "1.0.0",
        description = "User and post records served through a cache-aside layer",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Post endpoints
        crate::controllers::post_controller::list_posts,
        crate::controllers::post_controller::create_post,
        crate::controllers::post_controller::create_posts,
        crate::controllers::post_controller::get_post,
        crate::controllers::post_controller::replace_post,
        crate::controllers::post_controller::update_post,
        crate::controllers::post_controller::delete_post,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            PostId,
            User,
            Post,
            ErrorResponse,
            FieldError,
            HealthResponse,
            CreateUserRequest,
            UpdateUserRequest,
            CreatePostRequest,
            CreatePostsRequest,
            PostItem,
            ReplacePostRequest,
            UpdatePostRequest,
        )
    ),
    tags(
        (name = "users", description = "User records"),
        (name = "posts", description = "Post records"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
