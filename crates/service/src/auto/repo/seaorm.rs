use sea_orm::DatabaseConnection;
use models::{auto, sede};

use crate::auto::domain::AutoInput;
use crate::auto::repository::AutoRepository;
use crate::db::auto_service;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmAutoRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl AutoRepository for SeaOrmAutoRepository {
    async fn list_all(&self) -> Result<Vec<auto::Model>, ServiceError> {
        auto_service::list_autos(&self.db).await
    }

    async fn list_all_paged(&self, req: PageRequest) -> Result<Page<auto::Model>, ServiceError> {
        auto_service::list_autos_paginated(&self.db, req).await
    }

    async fn list_with_sede(&self) -> Result<Vec<(auto::Model, sede::Model)>, ServiceError> {
        auto_service::list_autos_with_sede(&self.db).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<auto::Model>, ServiceError> {
        auto_service::get_auto(&self.db, id).await
    }

    async fn save(&self, input: AutoInput) -> Result<auto::Model, ServiceError> {
        auto_service::save_auto(&self.db, input).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        auto_service::delete_auto(&self.db, id).await
    }

    async fn search_multicriteria(&self, term: &str) -> Result<Vec<auto::Model>, ServiceError> {
        auto_service::search_autos(&self.db, term).await
    }
}
