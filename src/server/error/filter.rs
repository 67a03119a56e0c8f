use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections raised while narrowing the server listing.
///
/// Every variant is a client mistake and maps to 400 Bad Request. A well-formed id
/// that matches nothing stays in this channel instead of becoming a 404.
#[derive(Error, Debug)]
pub enum FilterError {
    /// `quantity` is not a non-negative integer.
    #[error("quantity must be a non-negative integer, got '{0}'")]
    InvalidQuantity(String),

    /// `by_server_id` is not an integer.
    #[error("by_server_id must be an integer, got '{0}'")]
    InvalidServerId(String),

    /// No server with this id survived the earlier stages.
    #[error("server with id {0} not found")]
    ServerNotFound(i64),
}

impl IntoResponse for FilterError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected server filter: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
