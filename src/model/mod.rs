//! Domain models.
//!
//! Models are converted from SeaORM entities at the repository boundary via
//! `from_entity` so services never see stringly-typed Discord IDs.

pub mod daily;
pub mod farm;
pub mod outcome;
pub mod profile;
pub mod rank;
