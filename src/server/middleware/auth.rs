use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    middleware::session::AuthSession,
};

/// Resolves the caller of a request from their session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the authenticated user, if any.
    ///
    /// A session without a user id, or with the id of a user that no longer
    /// exists, is anonymous.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Session belongs to an existing user
    /// - `Ok(None)` - Anonymous caller
    /// - `Err(AppError)` - Session store or database failure
    pub async fn identify(&self) -> Result<Option<entity::user::Model>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        if user.is_none() {
            tracing::debug!("Session references missing user {}", user_id);
        }

        Ok(user)
    }
}
