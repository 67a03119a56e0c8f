//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories
//! insert whatever foreign-key parents they need when none are supplied.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(&db).await?;
//! let category = factory::category::CategoryFactory::new(&db)
//!     .name("Gaming")
//!     .build()
//!     .await?;
//! let server = factory::server::ServerFactory::new(&db)
//!     .owner(owner.id)
//!     .category(category.id)
//!     .members(&[owner.id])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `server` - Create server entities, optionally with members
//! - `server_member` - Create membership rows
//! - `channel` - Create channel entities
//! - `helpers` - Unique id counter and multi-entity helpers

pub mod category;
pub mod channel;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;

pub use category::create_category;
pub use channel::create_channel;
pub use server::create_server;
pub use server_member::create_server_member;
pub use user::create_user;
