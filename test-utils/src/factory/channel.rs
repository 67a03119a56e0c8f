//! Channel factory for creating test channel entities.
//!
//! Names go through `entity::channel::canonical_name`, the same as the
//! application write path.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channels inside an existing server.
pub struct ChannelFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i32,
    owner_id: i32,
    name: String,
    topic: String,
}

impl<'a> ChannelFactory<'a> {
    /// Creates a new ChannelFactory for the given server and owner.
    ///
    /// Defaults:
    /// - name: `"channel-{id}"`
    /// - topic: `"Topic {id}"`
    pub fn new(db: &'a DatabaseConnection, server_id: i32, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            server_id,
            owner_id,
            name: format!("channel-{}", id),
            topic: format!("Topic {}", id),
        }
    }

    /// Sets the channel name (stored lowercased).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the channel topic.
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Builds and inserts the channel entity into the database.
    pub async fn build(self) -> Result<entity::channel::Model, DbErr> {
        entity::channel::ActiveModel {
            name: ActiveValue::Set(entity::channel::canonical_name(&self.name)),
            owner_id: ActiveValue::Set(self.owner_id),
            topic: ActiveValue::Set(self.topic),
            server_id: ActiveValue::Set(self.server_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel with default values in the given server, owned by the
/// server owner.
pub async fn create_channel(
    db: &DatabaseConnection,
    server: &entity::server::Model,
) -> Result<entity::channel::Model, DbErr> {
    ChannelFactory::new(db, server.id, server.owner_id).build().await
}
