use super::setup_test_db;
use crate::{auto, errors::ModelError, sede};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, PaginatorTrait, Set};

/// Test sede create / read / delete
#[tokio::test]
async fn test_sede_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = sede::create(&db, "  Sede Central ", "Av. Universitaria 1801").await?;
    assert!(created.id_sede > 0);
    assert_eq!(created.nombre, "Sede Central");

    let found = sede::Entity::find_by_id(created.id_sede).one(&db).await?;
    assert_eq!(found, Some(created.clone()));

    sede::Entity::delete_by_id(created.id_sede).exec(&db).await?;
    assert!(sede::Entity::find_by_id(created.id_sede).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_sede_requires_nombre() -> Result<()> {
    let db = setup_test_db().await?;
    let err = sede::create(&db, "   ", "Jr. Lampa 123").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert_eq!(sede::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Test auto create / update / delete
#[tokio::test]
async fn test_auto_crud() -> Result<()> {
    let db = setup_test_db().await?;
    let s = sede::create(&db, "Sede Norte", "Av. Tupac Amaru 210").await?;

    let a = auto::create(&db, "Corolla", "Rojo", "ABC-123", Some(s.id_sede)).await?;
    let b = auto::create(&db, "Civic", "Negro", "XYZ-987", None).await?;
    assert_ne!(a.id_auto, b.id_auto);
    assert_eq!(auto::Entity::find().count(&db).await?, 2);

    let mut am: auto::ActiveModel = a.clone().into();
    am.color = Set("Azul".into());
    let updated = am.update(&db).await?;
    assert_eq!(updated.id_auto, a.id_auto);
    assert_eq!(updated.color, "Azul");

    let related = updated.find_related(sede::Entity).one(&db).await?;
    assert_eq!(related.map(|x| x.id_sede), Some(s.id_sede));

    auto::Entity::delete_by_id(b.id_auto).exec(&db).await?;
    assert_eq!(auto::Entity::find().count(&db).await?, 1);
    Ok(())
}

/// The foreign key rejects references to missing branches.
#[tokio::test]
async fn test_auto_foreign_key_enforced() -> Result<()> {
    let db = setup_test_db().await?;
    let res = auto::create(&db, "Yaris", "Blanco", "FK-001", Some(4242)).await;
    assert!(matches!(res, Err(ModelError::Db(_))));
    Ok(())
}

/// Deleting a sede detaches its autos instead of removing them.
#[tokio::test]
async fn test_sede_delete_sets_null() -> Result<()> {
    let db = setup_test_db().await?;
    let s = sede::create(&db, "Sede Sur", "Av. Benavides 4500").await?;
    let a = auto::create(&db, "Hilux", "Gris", "SUR-777", Some(s.id_sede)).await?;

    sede::Entity::delete_by_id(s.id_sede).exec(&db).await?;

    let after = auto::Entity::find_by_id(a.id_auto).one(&db).await?.expect("auto survives");
    assert_eq!(after.sede_id, None);
    Ok(())
}

#[test]
fn auto_serializes_camel_case() {
    let a = auto::Model { id_auto: 7, modelo: "Corolla".into(), color: "Rojo".into(), placa: "ABC-123".into(), sede_id: Some(2) };
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["idAuto"], 7);
    assert_eq!(v["sedeId"], 2);
}
