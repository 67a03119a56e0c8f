//! Chat Directory Test Utils
//!
//! Shared testing utilities for the chat directory backend. The crate offers a
//! builder for test contexts backed by in-memory SQLite databases, a session
//! bound to the same database, and factories for every entity.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_servers() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_directory_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let server = factory::create_server(db).await?;
//!     // Perform queries...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
