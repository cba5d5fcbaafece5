use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorListDto, MessageDto},
        user::{AuthResponseDto, CastVoteDto, LogInDto, SignUpDto, UpdateUserDto, UserEnvelopeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CastVoteParams, SignUpParams, UpdateUserParams, User},
        service::{auth::AuthService, user::UserService},
        state::AppState,
        util::json::ValidatedJson,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

const MODIFY_FORBIDDEN: &str = "Only the user or an admin can modify this user";
const VOTE_FORBIDDEN: &str = "Users can only cast their own votes";

/// Register a new account.
///
/// Creates a regular user after checking that username and email are unused, then
/// returns the user together with a bearer token.
///
/// # Returns
/// - `201 Created` - The new user and token
/// - `400 Bad Request` - Invalid fields, mismatched passwords, or duplicate username/email
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users/sign-up",
    tag = USER_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "User created", body = AuthResponseDto),
        (status = 400, description = "Invalid sign-up data", body = ErrorListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let (user, token) = service.sign_up(SignUpParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: user.into_dto(),
            token,
        }),
    ))
}

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - The user and a fresh bearer token
/// - `400 Bad Request` - Incorrect username or password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/users/log-in",
    tag = USER_TAG,
    request_body = LogInDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Incorrect username or password", body = ErrorListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn log_in(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LogInDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let (user, token) = service.log_in(&payload.username, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: user.into_dto(),
            token,
        }),
    ))
}

/// Get a user by ID.
///
/// # Access Control
/// - `Admin` - Only admins can view users
///
/// # Returns
/// - `200 OK` - `{ user }`
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelopeDto),
        (status = 403, description = "Caller is not an admin", body = ErrorListDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await
        .map_err(|e| e.or_forbidden("Only admins can view users"))?;

    let user = UserService::new(&state.db).get(&id).await?;

    Ok((
        StatusCode::OK,
        Json(UserEnvelopeDto {
            user: user.into_dto(),
        }),
    ))
}

/// Update a user's username and email.
///
/// Password, permission, memberships and votes are preserved.
///
/// # Access Control
/// - The user themself, or an admin
///
/// # Returns
/// - `200 OK` - `{ user }`
/// - `400 Bad Request` - Invalid fields or username/email taken by another user
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserEnvelopeDto),
        (status = 400, description = "Invalid user data", body = ErrorListDto),
        (status = 403, description = "Not allowed to modify this user", body = ErrorListDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(MODIFY_FORBIDDEN))?;
    ensure_self_or_admin(&actor, &id, MODIFY_FORBIDDEN)?;

    let user = UserService::new(&state.db)
        .update(UpdateUserParams::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserEnvelopeDto {
            user: user.into_dto(),
        }),
    ))
}

/// Delete a user.
///
/// Posts, comments and memberships of the user are kept.
///
/// # Access Control
/// - The user themself, or an admin
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 403, description = "Not allowed to modify this user", body = ErrorListDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(MODIFY_FORBIDDEN))?;
    ensure_self_or_admin(&actor, &id, MODIFY_FORBIDDEN)?;

    UserService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("User {} deleted", id),
        }),
    ))
}

/// Cast, change or clear a vote on a post.
///
/// Adds `increase` to the post's tally, then records `vote` as the caller's direction
/// for that post (an empty `vote` clears it).
///
/// # Access Control
/// - Only the user named in the path
///
/// # Returns
/// - `200 OK` - `{ user }` with the updated vote map
/// - `400 Bad Request` - Invalid fields, or `Post doesn't exist`
/// - `403 Forbidden` - Caller is not the user in the path
#[utoipa::path(
    post,
    path = "/users/{id}/vote",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "ID of the voting user")
    ),
    request_body = CastVoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = UserEnvelopeDto),
        (status = 400, description = "Invalid vote or missing post", body = ErrorListDto),
        (status = 403, description = "Caller is not the voting user", body = ErrorListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CastVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(VOTE_FORBIDDEN))?;
    if actor.id != id {
        return Err(AppError::Forbidden(VOTE_FORBIDDEN.to_string()));
    }

    let params = CastVoteParams::from_dto(actor.id, payload)?;
    let user = UserService::new(&state.db).cast_vote(params).await?;

    Ok((
        StatusCode::OK,
        Json(UserEnvelopeDto {
            user: user.into_dto(),
        }),
    ))
}

/// Allows the request when `actor` is the target user or an admin.
pub(super) fn ensure_self_or_admin(actor: &User, user_id: &str, message: &str) -> Result<(), AppError> {
    if actor.id == user_id || actor.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(message.to_string()))
    }
}
