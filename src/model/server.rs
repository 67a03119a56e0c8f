use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of the server listing.
///
/// Values are kept as raw strings; parsing and validation happen in the filter
/// stages so that an authentication failure wins over a malformed number.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListQuery {
    /// Category name fragment (case-insensitive) or category id.
    pub category: Option<String>,
    /// `"true"` to keep only servers the caller is a member of.
    pub by_user: Option<String>,
    /// `"true"` to include `num_members` in every result.
    pub with_num_members: Option<String>,
    /// Keep only the first N servers.
    pub quantity: Option<String>,
    /// Keep only the server with this id.
    pub by_server_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChannelDto {
    pub id: i32,
    pub name: String,
    pub owner: i32,
    pub topic: String,
    pub server: i32,
}

/// Server as returned by the directory listing.
///
/// `num_members` has three states on the wire: the key is absent when the count
/// was not requested, `null` when it was requested but not computed for this
/// record, and a number otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    /// User id of the owner.
    pub owner: i32,
    /// Category id.
    pub category: i32,
    pub description: Option<String>,
    #[serde(rename = "channel_server")]
    pub channels: Vec<ChannelDto>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    #[schema(value_type = Option<u64>)]
    pub num_members: Option<Option<u64>>,
}

/// Maps a present key to `Some`, so a JSON `null` becomes `Some(None)` while a
/// missing key falls back to the `default` of `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u64>::deserialize(deserializer).map(Some)
}
