//! Filter pipeline for the server listing.
//!
//! A listing starts from every server in ascending id order. Each stage receives the
//! current `ServerQuery` and a `FilterContext` and returns a new query, or an error
//! that stops the pipeline. Stages whose parameter is absent return the query
//! unchanged. Nothing here touches the database; the service loads whatever the
//! context needs beforehand and executes the resulting select afterwards.

use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};

use crate::server::{
    error::{auth::AuthError, filter::FilterError, AppError},
    model::{category::Category, server::ServerListParams},
    util::parse::{parse_quantity, parse_server_id},
};

/// A single pipeline stage.
pub type Stage = fn(ServerQuery, &FilterContext) -> Result<ServerQuery, AppError>;

/// Largest row count SQLite accepts as a LIMIT.
const MAX_LIMIT: u64 = i64::MAX as u64;

/// Inputs shared by every stage.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    pub params: &'a ServerListParams,
    /// Categories the category stage matches against. Only needs to be loaded
    /// when `params.category` is set.
    pub categories: &'a [Category],
}

/// Stages in application order.
pub const STAGES: [(&str, Stage); 6] = [
    ("authentication", require_identity),
    ("category", filter_category),
    ("membership", filter_membership),
    ("member_count", annotate_member_count),
    ("quantity", truncate),
    ("server_id", filter_server_id),
];

/// Description of the listing query built up by the stages.
#[derive(Debug, Clone)]
pub struct ServerQuery {
    /// Server select with every filter, ordering and limit applied so far.
    pub select: Select<entity::server::Entity>,
    /// Set once a limit has been applied.
    pub truncated: bool,
    /// Member counts must be attached to the results.
    pub with_num_members: bool,
    /// Id requested by the exact-id stage; an empty result then means not found.
    pub server_id: Option<i64>,
}

impl ServerQuery {
    /// All servers in natural order.
    pub fn all() -> Self {
        Self {
            select: entity::prelude::Server::find().order_by_asc(entity::server::Column::Id),
            truncated: false,
            with_num_members: false,
            server_id: None,
        }
    }

    /// Runs every stage against `context`, stopping at the first error.
    pub fn build(context: &FilterContext) -> Result<Self, AppError> {
        STAGES
            .iter()
            .try_fold(Self::all(), |query, (name, stage)| {
                tracing::trace!("Applying server filter stage {}", name);
                stage(query, context)
            })
    }
}

/// Rejects identity-scoped listings from anonymous callers.
pub fn require_identity(
    query: ServerQuery,
    context: &FilterContext,
) -> Result<ServerQuery, AppError> {
    let params = context.params;
    if params.by_user && params.caller_id.is_none() {
        return Err(AuthError::AuthenticationRequired.into());
    }

    Ok(query)
}

/// Keeps servers whose category name contains the term, ignoring case across all
/// of Unicode, or whose category id equals the term as text.
pub fn filter_category(
    query: ServerQuery,
    context: &FilterContext,
) -> Result<ServerQuery, AppError> {
    let params = context.params;
    let Some(term) = params.category.as_deref() else {
        return Ok(query);
    };
    tracing::debug!("Filtering servers by category '{}'", term);

    let needle = term.to_lowercase();
    let category_ids: Vec<i32> = context
        .categories
        .iter()
        .filter(|category| category_matches(category, term, &needle))
        .map(|category| category.id)
        .collect();

    Ok(ServerQuery {
        select: query
            .select
            .filter(entity::server::Column::CategoryId.is_in(category_ids)),
        ..query
    })
}

/// Keeps servers the caller is a member of.
pub fn filter_membership(
    query: ServerQuery,
    context: &FilterContext,
) -> Result<ServerQuery, AppError> {
    let params = context.params;
    if !params.by_user {
        return Ok(query);
    }
    let Some(caller_id) = params.caller_id else {
        return Err(AuthError::AuthenticationRequired.into());
    };
    tracing::debug!("Filtering servers by member {}", caller_id);

    let joined = entity::prelude::ServerMember::find()
        .select_only()
        .column(entity::server_member::Column::ServerId)
        .filter(entity::server_member::Column::UserId.eq(caller_id))
        .into_query();

    Ok(ServerQuery {
        select: query
            .select
            .filter(entity::server::Column::Id.in_subquery(joined)),
        ..query
    })
}

/// Marks the results for member counting.
pub fn annotate_member_count(
    query: ServerQuery,
    context: &FilterContext,
) -> Result<ServerQuery, AppError> {
    let params = context.params;
    if !params.with_num_members {
        return Ok(query);
    }
    tracing::debug!("Annotating servers with member counts");

    Ok(ServerQuery {
        with_num_members: true,
        ..query
    })
}

/// Keeps the first N servers of the current set.
pub fn truncate(query: ServerQuery, context: &FilterContext) -> Result<ServerQuery, AppError> {
    let params = context.params;
    let Some(raw) = params.quantity.as_deref() else {
        return Ok(query);
    };
    let quantity = parse_quantity(raw)?;
    tracing::debug!("Truncating servers to {}", quantity);

    Ok(ServerQuery {
        select: query.select.limit(quantity.min(MAX_LIMIT)),
        truncated: true,
        ..query
    })
}

/// Keeps only the server with the requested id.
///
/// After truncation the id is matched against the truncated window, so an id
/// outside the first N servers is not found even if it exists.
pub fn filter_server_id(
    query: ServerQuery,
    context: &FilterContext,
) -> Result<ServerQuery, AppError> {
    let params = context.params;
    let Some(raw) = params.by_server_id.as_deref() else {
        return Ok(query);
    };
    let server_id = parse_server_id(raw)?;
    tracing::debug!("Filtering servers by id {}", server_id);

    let Ok(id) = i32::try_from(server_id) else {
        return Err(FilterError::ServerNotFound(server_id).into());
    };

    let select = if query.truncated {
        let window = query
            .select
            .select_only()
            .column(entity::server::Column::Id)
            .into_query();

        entity::prelude::Server::find()
            .filter(entity::server::Column::Id.eq(id))
            .filter(entity::server::Column::Id.in_subquery(window))
    } else {
        query.select.filter(entity::server::Column::Id.eq(id))
    };

    Ok(ServerQuery {
        select,
        server_id: Some(server_id),
        ..query
    })
}

/// `needle` is `term` lowercased.
fn category_matches(category: &Category, term: &str, needle: &str) -> bool {
    category.name.to_lowercase().contains(needle) || category.id.to_string() == term
}
