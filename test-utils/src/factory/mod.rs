//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let profile = factory::create_profile(&db).await?;
//!
//! // Customize through the builder
//! let farm = factory::farm::FarmFactory::new(&db)
//!     .server_id("42")
//!     .daily_goal(Some(10))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `profile` - Create user profile entities
//! - `farm` - Create farm configuration entities
//! - `daily_stats` - Create archived daily snapshot entities
//! - `helpers` - Unique ID generation

pub mod daily_stats;
pub mod farm;
pub mod helpers;
pub mod profile;

pub use daily_stats::create_daily_stats;
pub use farm::create_farm;
pub use profile::create_profile;
