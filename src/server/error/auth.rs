use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// An identity-scoped filter was requested by an anonymous caller.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("You should authenticate first to access the filter")]
    AuthenticationRequired,
}

/// Converts authentication errors into HTTP responses.
///
/// The client-facing message is the error's display text.
///
/// # Returns
/// - 401 Unauthorized - For `AuthenticationRequired`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
