use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Select};
use std::collections::HashMap;

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a shaped server query.
    ///
    /// The select carries its own filters, ordering and limit; this only executes it.
    pub async fn find(
        &self,
        select: Select<entity::server::Entity>,
    ) -> Result<Vec<entity::server::Model>, DbErr> {
        select.all(self.db).await
    }

    /// Counts the members of each given server.
    ///
    /// Every requested id gets an entry, so servers without members map to 0.
    pub async fn count_members(&self, server_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        let mut counts: HashMap<i32, u64> = server_ids.iter().map(|id| (*id, 0)).collect();

        if server_ids.is_empty() {
            return Ok(counts);
        }

        let memberships = entity::prelude::ServerMember::find()
            .filter(entity::server_member::Column::ServerId.is_in(server_ids.iter().copied()))
            .all(self.db)
            .await?;

        for membership in memberships {
            *counts.entry(membership.server_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}
