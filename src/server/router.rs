use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Chat directory API"),
    tags((name = "server", description = "Chat server directory"))
)]
struct ApiDoc;

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::server::list_servers))
}

/// API routes plus the OpenAPI document at `/api/schema` and Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/schema", api))
}
