use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{comment, community, health, post, user},
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Agora", description = "Communities, posts, threaded comments and votes"),
    modifiers(&BearerAuth)
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// Every handler is registered together with its OpenAPI operation; the generated
/// document is served at `/docs/openapi.json` with Swagger UI at `/docs`. Unmatched
/// routes fall through to a 404 `{ error: "Not found" }`.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(user::sign_up))
        .routes(routes!(user::log_in))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::cast_vote))
        .routes(routes!(community::get_communities, community::create_community))
        .routes(routes!(
            community::get_community,
            community::update_community,
            community::delete_community
        ))
        .routes(routes!(community::subscribe))
        .routes(routes!(community::unsubscribe))
        .routes(routes!(post::get_posts, post::create_post))
        .routes(routes!(post::get_post, post::update_post, post::delete_post))
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(
            comment::get_comment,
            comment::update_comment,
            comment::delete_comment
        ))
        .split_for_parts();

    api.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
