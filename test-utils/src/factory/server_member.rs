//! Membership factory linking users to servers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds `user_id` to the member set of `server_id`.
///
/// # Returns
/// - `Ok(entity::server_member::Model)` - Created membership row
/// - `Err(DbErr)` - Database error, including duplicate membership
pub async fn create_server_member(
    db: &DatabaseConnection,
    server_id: i32,
    user_id: i32,
) -> Result<entity::server_member::Model, DbErr> {
    entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
