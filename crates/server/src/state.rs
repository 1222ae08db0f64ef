use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auto::{repo::seaorm::SeaOrmAutoRepository, AutoService};

/// Shared handler state: the pool plus the auto service built on it.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub autos: Arc<AutoService<SeaOrmAutoRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmAutoRepository { db: db.clone() };
        Self { db, autos: Arc::new(AutoService::new(Arc::new(repo))) }
    }
}
