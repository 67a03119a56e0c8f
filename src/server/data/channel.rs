use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::server::model::channel::Channel;

pub struct ChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the channels of several servers in one query, keyed by server id.
    ///
    /// Servers without channels have no entry in the map.
    pub async fn get_by_server_ids(
        &self,
        server_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Channel>>, DbErr> {
        if server_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let channels = entity::prelude::Channel::find()
            .filter(entity::channel::Column::ServerId.is_in(server_ids.iter().copied()))
            .order_by_asc(entity::channel::Column::Id)
            .all(self.db)
            .await?;

        let mut by_server: HashMap<i32, Vec<Channel>> = HashMap::new();
        for channel in channels {
            by_server
                .entry(channel.server_id)
                .or_default()
                .push(Channel::from_entity(channel));
        }

        Ok(by_server)
    }
}
