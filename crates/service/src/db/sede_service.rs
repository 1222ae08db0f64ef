use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use models::sede;
use crate::errors::ServiceError;

/// List every sede, ordered by id.
pub async fn list_sedes(db: &DatabaseConnection) -> Result<Vec<sede::Model>, ServiceError> {
    sede::Entity::find()
        .order_by_asc(sede::Column::IdSede)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get sede by id.
pub async fn get_sede(db: &DatabaseConnection, id: i32) -> Result<Option<sede::Model>, ServiceError> {
    sede::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Create a sede.
pub async fn create_sede(db: &DatabaseConnection, nombre: &str, direccion: &str) -> Result<sede::Model, ServiceError> {
    Ok(sede::create(db, nombre, direccion).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn sede_listing_is_ordered() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = create_sede(&db, "Sede B", "Calle B 2").await?;
        let a = create_sede(&db, "Sede A", "Calle A 1").await?;

        let all = list_sedes(&db).await?;
        assert_eq!(all.iter().map(|s| s.id_sede).collect::<Vec<_>>(), vec![b.id_sede, a.id_sede]);

        assert_eq!(get_sede(&db, a.id_sede).await?, Some(a));
        assert!(get_sede(&db, 9999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn blank_nombre_is_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_sede(&db, " ", "Calle 1").await.unwrap_err();
        assert!(err.is_validation());
        Ok(())
    }
}
