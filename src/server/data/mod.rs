//! Database repository layer for directory entities.
//!
//! Repositories use SeaORM entity models internally and hand domain models back to the
//! service layer. All database queries and inserts go through these repositories.

pub mod category;
pub mod channel;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;
