//! Server factory for creating test server entities.
//!
//! Missing owner or category references are filled by creating a default user or
//! category, so a bare `create_server(db)` always succeeds on a directory schema.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db)
///     .name("Speedrunners")
///     .category(category.id)
///     .members(&[alice.id, bob.id])
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: Option<i32>,
    category_id: Option<i32>,
    description: Option<String>,
    members: Vec<i32>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"`
    /// - owner: a newly created user
    /// - category: a newly created category
    /// - description: `None`
    /// - members: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Server {}", id),
            owner_id: None,
            category_id: None,
            description: None,
            members: Vec::new(),
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning user.
    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Sets the category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the users added to the member set after insert.
    pub fn members(mut self, user_ids: &[i32]) -> Self {
        self.members = user_ids.to_vec();
        self
    }

    /// Builds and inserts the server, then its membership rows.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        let owner_id = match self.owner_id {
            Some(id) => id,
            None => crate::factory::user::create_user(self.db).await?.id,
        };
        let category_id = match self.category_id {
            Some(id) => id,
            None => crate::factory::category::create_category(self.db).await?.id,
        };

        let server = entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(owner_id),
            category_id: ActiveValue::Set(category_id),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for user_id in self.members {
            crate::factory::server_member::create_server_member(self.db, server.id, user_id)
                .await?;
        }

        Ok(server)
    }
}

/// Creates a server with default values and no members.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
