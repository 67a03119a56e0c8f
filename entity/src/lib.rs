//! SeaORM entities for the chat server directory.
//!
//! Tables: `user`, `category`, `server`, `server_member` (many-to-many join
//! between servers and users) and `channel`.

pub mod prelude;

pub mod category;
pub mod channel;
pub mod server;
pub mod server_member;
pub mod user;
