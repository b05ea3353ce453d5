//! Database repository layer for the farming engine.
//!
//! Each repository wraps a SeaORM connection and converts entity models into
//! domain models at the boundary, so nothing above this layer sees string IDs
//! or JSON columns. Repositories are generic over `ConnectionTrait` so they run
//! the same way on the pool and inside a transaction.

pub mod daily_stats;
pub mod farm;
pub mod profile;

use sea_orm::{DbErr, SqlErr};

/// Whether an insert failed because the row already exists.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod test;
