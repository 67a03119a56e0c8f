//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` users with default values.
///
/// Useful for populating member lists.
///
/// # Returns
/// - `Ok(Vec<entity::user::Model>)` - Created users in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_users(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        users.push(crate::factory::user::create_user(db).await?);
    }
    Ok(users)
}

/// Creates a server in a category with the given name, owned by a new user,
/// with `member_count` freshly created members.
///
/// # Returns
/// - `Ok((category, server, members))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_in_category(
    db: &DatabaseConnection,
    category_name: &str,
    member_count: usize,
) -> Result<
    (
        entity::category::Model,
        entity::server::Model,
        Vec<entity::user::Model>,
    ),
    DbErr,
> {
    let category = crate::factory::category::CategoryFactory::new(db)
        .name(category_name)
        .build()
        .await?;
    let members = create_users(db, member_count).await?;
    let member_ids: Vec<i32> = members.iter().map(|u| u.id).collect();

    let server = crate::factory::server::ServerFactory::new(db)
        .category(category.id)
        .members(&member_ids)
        .build()
        .await?;

    Ok((category, server, members))
}
