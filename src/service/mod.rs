//! Service layer for farming rules and orchestration.
//!
//! Services sit between the Discord handlers and the repositories. They
//! validate requests, coordinate repository calls and own the live daily
//! aggregate. Handlers only talk to services and render what they return.

pub mod engine;
pub mod farm;
pub mod gate;
pub mod profile;
pub mod stats;
