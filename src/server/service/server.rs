pub mod filter;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, channel::ChannelRepository, server::ServerRepository,
    },
    error::{filter::FilterError, AppError},
    model::server::{Server, ServerListParams},
    service::server::filter::{FilterContext, ServerQuery},
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the listing parameters.
    ///
    /// Builds the query through the filter pipeline, runs it, then attaches
    /// channels and, when requested, member counts.
    ///
    /// # Arguments
    /// - `params` - Normalized listing parameters including the caller's id
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers in ascending id order, possibly empty
    /// - `Err(AppError::AuthErr)` - Membership filter requested anonymously
    /// - `Err(AppError::FilterErr)` - Malformed quantity or id, or id not found
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, params: &ServerListParams) -> Result<Vec<Server>, AppError> {
        let categories = if params.category.is_some() {
            CategoryRepository::new(self.db).get_all().await?
        } else {
            Vec::new()
        };
        let query = ServerQuery::build(&FilterContext {
            params,
            categories: &categories,
        })?;

        let server_repo = ServerRepository::new(self.db);
        let channel_repo = ChannelRepository::new(self.db);

        let entities = server_repo.find(query.select).await?;

        if let Some(server_id) = query.server_id {
            if entities.is_empty() {
                return Err(FilterError::ServerNotFound(server_id).into());
            }
        }

        let ids: Vec<i32> = entities.iter().map(|s| s.id).collect();
        let mut channels = channel_repo.get_by_server_ids(&ids).await?;
        let counts = if query.with_num_members {
            Some(server_repo.count_members(&ids).await?)
        } else {
            None
        };

        let servers = entities
            .into_iter()
            .map(|entity| {
                let server_channels = channels.remove(&entity.id).unwrap_or_default();
                let mut server = Server::from_entity(entity, server_channels);
                server.num_members = counts
                    .as_ref()
                    .and_then(|counts| counts.get(&server.id).copied());
                server
            })
            .collect();

        Ok(servers)
    }
}
