//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They turn request parameters into queries, coordinate repository calls, and hand
//! domain models back to controllers.

pub mod server;
