//! Channel domain model.

use crate::model::server::ChannelDto;

/// A text channel belonging to a server.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub topic: String,
    pub server_id: i32,
}

impl Channel {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::channel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            topic: entity.topic,
            server_id: entity.server_id,
        }
    }

    /// Converts the domain model to a DTO at the controller boundary.
    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            name: self.name,
            owner: self.owner_id,
            topic: self.topic,
            server: self.server_id,
        }
    }
}
