//! Shroomfarm Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the shroomfarm
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for seeding profiles, farms and archived daily stats
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_profile_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_farm_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let profile = test_utils::factory::create_profile(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
