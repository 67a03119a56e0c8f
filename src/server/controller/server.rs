use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        server::{ServerDto, ServerListQuery},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::server::ServerListParams,
        service::server::ServerService, state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List servers in the directory.
///
/// Returns every server in ascending id order, narrowed by the optional query
/// parameters. Anonymous callers may use every parameter except `by_user`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Caller's session, used to resolve the authenticated user
/// - `query` - Raw listing parameters
///
/// # Returns
/// - `200 OK` - Matching servers, possibly empty
/// - `400 Bad Request` - Malformed quantity or id, or id not found
/// - `401 Unauthorized` - `by_user=true` without an authenticated user
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/api/server/select",
    tag = SERVER_TAG,
    params(ServerListQuery),
    responses(
        (status = 200, description = "Successfully listed servers", body = Vec<ServerDto>),
        (status = 400, description = "Invalid filter parameter or server not found", body = ErrorDto),
        (status = 401, description = "Membership filter requires authentication", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ServerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).identify().await?;

    let params = ServerListParams::from_dto(query, caller.map(|user| user.id));

    let service = ServerService::new(&state.db);
    let servers = service.list(&params).await?;

    let body: Vec<ServerDto> = servers
        .into_iter()
        .map(|server| server.into_dto(params.with_num_members))
        .collect();

    Ok((StatusCode::OK, Json(body)))
}
