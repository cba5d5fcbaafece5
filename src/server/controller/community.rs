use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorListDto, MessageDto},
        community::{CommunityDto, CreateCommunityDto, UpdateCommunityDto},
    },
    server::{
        controller::user::ensure_self_or_admin,
        error::AppError,
        middleware::auth::AuthGuard,
        model::community::{CreateCommunityParams, UpdateCommunityParams},
        service::community::CommunityService,
        state::AppState,
        util::json::ValidatedJson,
    },
};

/// Tag for grouping community endpoints in OpenAPI documentation
pub static COMMUNITY_TAG: &str = "community";

const SUBSCRIPTION_FORBIDDEN: &str = "Only the user or an admin can change subscriptions";

/// List all communities.
///
/// # Returns
/// - `200 OK` - Communities in creation order with member and post counts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/communities",
    tag = COMMUNITY_TAG,
    responses(
        (status = 200, description = "All communities", body = Vec<CommunityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_communities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let communities = CommunityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            communities
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a community by ID.
///
/// # Returns
/// - `200 OK` - The community including member ids
/// - `404 Not Found` - No community with that id
#[utoipa::path(
    get,
    path = "/communities/{id}",
    tag = COMMUNITY_TAG,
    params(
        ("id" = String, Path, description = "Community ID")
    ),
    responses(
        (status = 200, description = "Community found", body = CommunityDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_community(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let community = CommunityService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(community.into_dto())))
}

/// Create a community.
///
/// The caller becomes the creator but is not subscribed.
///
/// # Access Control
/// - Any logged in user
///
/// # Returns
/// - `201 Created` - The new community
/// - `400 Bad Request` - Invalid fields or `Community name already exists`
/// - `403 Forbidden` - Not logged in
#[utoipa::path(
    post,
    path = "/communities",
    tag = COMMUNITY_TAG,
    request_body = CreateCommunityDto,
    responses(
        (status = 201, description = "Community created", body = CommunityDto),
        (status = 400, description = "Invalid community data", body = ErrorListDto),
        (status = 403, description = "Not logged in", body = ErrorListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_community(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateCommunityDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden("Only logged in users can create communities"))?;

    let community = CommunityService::new(&state.db)
        .create(CreateCommunityParams::from_dto(actor.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(community.into_dto())))
}

/// Update a community.
///
/// Creator and members are preserved; the name must stay unique among other
/// communities.
///
/// # Access Control
/// - Only the creator
#[utoipa::path(
    put,
    path = "/communities/{id}",
    tag = COMMUNITY_TAG,
    params(
        ("id" = String, Path, description = "Community ID")
    ),
    request_body = UpdateCommunityDto,
    responses(
        (status = 200, description = "Community updated", body = CommunityDto),
        (status = 400, description = "Invalid community data", body = ErrorListDto),
        (status = 403, description = "Caller is not the creator", body = ErrorListDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_community(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCommunityDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden("Only the creator can edit this community"))?;

    let community = CommunityService::new(&state.db)
        .update(UpdateCommunityParams::from_dto(id, payload), &actor)
        .await?;

    Ok((StatusCode::OK, Json(community.into_dto())))
}

/// Delete a community.
///
/// Posts and memberships are kept.
///
/// # Access Control
/// - Only the creator
#[utoipa::path(
    delete,
    path = "/communities/{id}",
    tag = COMMUNITY_TAG,
    params(
        ("id" = String, Path, description = "Community ID")
    ),
    responses(
        (status = 200, description = "Community deleted", body = MessageDto),
        (status = 403, description = "Caller is not the creator", body = ErrorListDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_community(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden("Only the creator can delete this community"))?;

    CommunityService::new(&state.db).delete(&id, &actor).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Community {} deleted", id),
        }),
    ))
}

/// Subscribe a user to a community.
///
/// Subscribing an existing member changes nothing.
///
/// # Access Control
/// - The user being subscribed, or an admin
///
/// # Returns
/// - `200 OK` - The community after the change
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No such community or user
#[utoipa::path(
    post,
    path = "/communities/{id}/subscribe/{user_id}",
    tag = COMMUNITY_TAG,
    params(
        ("id" = String, Path, description = "Community ID"),
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User subscribed", body = CommunityDto),
        (status = 403, description = "Not allowed to change this subscription", body = ErrorListDto),
        (status = 404, description = "Community or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(SUBSCRIPTION_FORBIDDEN))?;
    ensure_self_or_admin(&actor, &user_id, SUBSCRIPTION_FORBIDDEN)?;

    let community = CommunityService::new(&state.db)
        .subscribe(&id, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(community.into_dto())))
}

/// Unsubscribe a user from a community.
///
/// # Access Control
/// - The user being unsubscribed, or an admin
#[utoipa::path(
    post,
    path = "/communities/{id}/unsubscribe/{user_id}",
    tag = COMMUNITY_TAG,
    params(
        ("id" = String, Path, description = "Community ID"),
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User unsubscribed", body = CommunityDto),
        (status = 403, description = "Not allowed to change this subscription", body = ErrorListDto),
        (status = 404, description = "Community or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await
        .map_err(|e| e.or_forbidden(SUBSCRIPTION_FORBIDDEN))?;
    ensure_self_or_admin(&actor, &user_id, SUBSCRIPTION_FORBIDDEN)?;

    let community = CommunityService::new(&state.db)
        .unsubscribe(&id, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(community.into_dto())))
}
