//! Application state shared by every Discord event handler and scheduled job.
//!
//! Built once at startup. Cloning is cheap: the database pool, the live daily
//! aggregate and the farm gate are all reference counted, so every clone sees
//! the same state.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    error::AppError,
    service::{engine::FarmEngine, gate::FarmGate, stats::StatsService},
    util::clock::Clock,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clock: Arc<dyn Clock>,
    pub stats: StatsService,
    pub engine: FarmEngine,
    pub gate: FarmGate,
}

impl AppState {
    /// Restores today's aggregate and wires the services around it.
    pub async fn new(db: DatabaseConnection, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let stats = StatsService::load(db.clone(), clock.clone()).await?;
        let engine = FarmEngine::new(db.clone(), stats.clone(), clock.clone());

        Ok(Self {
            db,
            clock,
            stats,
            engine,
            gate: FarmGate::new(),
        })
    }
}
