use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorListDto, MessageDto},
        post::{CreatePostDto, PostDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::post::{CreatePostParams, UpdatePostParams},
        service::post::PostService,
        state::AppState,
        util::json::ValidatedJson,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

const MODIFY_FORBIDDEN: &str = "Only the author or an admin can modify this post";

/// List all posts in creation order.
#[utoipa::path(
    get,
    path = "/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All posts", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a post by ID.
///
/// # Returns
/// - `200 OK` - The post with its top-level comment ids
/// - `404 Not Found` - Malformed id or no such post
#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Create a post in a community.
///
/// # Access Control
/// - Any logged in user
///
/// # Returns
/// - `201 Created` - The new post with zero votes
/// - `400 Bad Request` - Invalid fields or `Community doesn't exist`
/// - `403 Forbidden` - Not logged in
#[utoipa::path(
    post,
    path = "/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorListDto),
        (status = 403, description = "Not logged in", body = ErrorListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden("Only logged in users can create posts"))?;

    let post = PostService::new(&state.db)
        .create(CreatePostParams::from_dto(actor.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Update a post's title, text and url.
///
/// # Access Control
/// - The author, or an admin
#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorListDto),
        (status = 403, description = "Not allowed to modify this post", body = ErrorListDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(MODIFY_FORBIDDEN))?;

    let post = PostService::new(&state.db)
        .update(UpdatePostParams::from_dto(id, payload), &actor)
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post. Its comments are kept.
///
/// # Access Control
/// - The author, or an admin
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 403, description = "Not allowed to modify this post", body = ErrorListDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(MODIFY_FORBIDDEN))?;

    PostService::new(&state.db).delete(&id, &actor).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Post {} deleted", id),
        }),
    ))
}
