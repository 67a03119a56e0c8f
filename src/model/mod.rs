//! Data transfer objects shared by the API surface.

pub mod api;
pub mod server;
