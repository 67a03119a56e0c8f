//! Server domain models and listing parameters.
//!
//! `ServerListParams` is the normalized form of the listing query string that the
//! filter stages read. `Server` carries an optional member count which is only
//! filled when the count annotation ran.

use crate::{
    model::server::{ServerDto, ServerListQuery},
    server::model::channel::Channel,
};

/// Normalized parameters for the server listing.
///
/// Empty strings from the query string are treated as absent, and boolean flags
/// are only set by the exact value `"true"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListParams {
    /// Category name fragment or category id as text.
    pub category: Option<String>,
    /// Restrict to servers the caller is a member of.
    pub by_user: bool,
    /// Attach the member count to every result.
    pub with_num_members: bool,
    /// Raw truncation size, parsed by the quantity stage.
    pub quantity: Option<String>,
    /// Raw server id, parsed by the id stage.
    pub by_server_id: Option<String>,
    /// Id of the authenticated caller, `None` for anonymous requests.
    pub caller_id: Option<i32>,
}

impl ServerListParams {
    /// Converts the query string DTO into listing parameters.
    ///
    /// # Arguments
    /// - `query` - Raw query string values
    /// - `caller_id` - Authenticated user id, if any
    pub fn from_dto(query: ServerListQuery, caller_id: Option<i32>) -> Self {
        Self {
            category: non_empty(query.category),
            by_user: is_true(query.by_user.as_deref()),
            with_num_members: is_true(query.with_num_members.as_deref()),
            quantity: non_empty(query.quantity),
            by_server_id: non_empty(query.by_server_id),
            caller_id,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// A chat server with its channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    pub category_id: i32,
    pub description: Option<String>,
    pub channels: Vec<Channel>,
    /// Member count, present only when the listing requested it.
    pub num_members: Option<u64>,
}

impl Server {
    /// Converts an entity model and its channels to a domain model.
    ///
    /// The member count starts out unset.
    pub fn from_entity(entity: entity::server::Model, channels: Vec<Channel>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            owner_id: entity.owner_id,
            category_id: entity.category_id,
            description: entity.description,
            channels,
            num_members: None,
        }
    }

    /// Converts the domain model to a DTO at the controller boundary.
    ///
    /// # Arguments
    /// - `with_num_members` - Whether this call asked for member counts. When false
    ///   the `num_members` key is left out of the output entirely; when true it is
    ///   emitted, as `null` if no count was computed.
    pub fn into_dto(self, with_num_members: bool) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            owner: self.owner_id,
            category: self.category_id,
            description: self.description,
            channels: self.channels.into_iter().map(Channel::into_dto).collect(),
            num_members: with_num_members.then_some(self.num_members),
        }
    }
}
