use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorListDto, MessageDto},
        comment::{CommentDto, CommentNodeDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
        util::json::ValidatedJson,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

const MODIFY_FORBIDDEN: &str = "Only the author or an admin can modify this comment";

/// Get the comment tree of a post.
///
/// Returns the post's top-level comments in creation order with responses resolved into
/// nested comments down to the configured depth; deeper responses are bare ids. An
/// unknown post has no comments.
#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comment tree", body = Vec<CommentNodeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tree = CommentService::new(&state.db)
        .get_tree(&post_id, state.comment_max_depth)
        .await?;

    Ok((
        StatusCode::OK,
        Json(tree.into_iter().map(|n| n.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a single comment of a post.
///
/// # Returns
/// - `200 OK` - The comment with its response ids
/// - `404 Not Found` - `No comment with id <id> found`, also for malformed ids
#[utoipa::path(
    get,
    path = "/posts/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Post ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment found", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .get(&post_id, &comment_id)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Comment on a post, or respond to another comment.
///
/// # Access Control
/// - Any logged in user
///
/// # Returns
/// - `201 Created` - The saved comment
/// - `400 Bad Request` - Blank text or `Parent comment doesn't exist`
/// - `403 Forbidden` - Not logged in
/// - `404 Not Found` - No such post
#[utoipa::path(
    post,
    path = "/posts/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorListDto),
        (status = 403, description = "Not logged in", body = ErrorListDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(post_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden("Only logged in users can comment"))?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams::from_dto(post_id, actor.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Replace the text of a comment.
///
/// Votes, author, parent and responses are preserved.
///
/// # Access Control
/// - The author, or an admin
#[utoipa::path(
    put,
    path = "/posts/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Post ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ErrorListDto),
        (status = 403, description = "Not allowed to modify this comment", body = ErrorListDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((post_id, comment_id)): Path<(String, String)>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(MODIFY_FORBIDDEN))?;

    let comment = CommentService::new(&state.db)
        .update(
            UpdateCommentParams::from_dto(post_id, comment_id, payload),
            &actor,
        )
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// Responses of the comment stay stored but are no longer part of the tree.
///
/// # Access Control
/// - The author, or an admin
#[utoipa::path(
    delete,
    path = "/posts/{id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("id" = String, Path, description = "Post ID"),
        ("comment_id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 403, description = "Not allowed to modify this comment", body = ErrorListDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(MODIFY_FORBIDDEN))?;

    CommentService::new(&state.db)
        .delete(&post_id, &comment_id, &actor)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Comment {} deleted", comment_id),
        }),
    ))
}
