use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{auto, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sede")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_sede: i32,
    pub nombre: String,
    pub direccion: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Auto }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Auto => Entity::has_many(auto::Entity).into(),
        }
    }
}

impl Related<auto::Entity> for Entity {
    fn to() -> RelationDef { Relation::Auto.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_nombre(nombre: &str) -> Result<(), errors::ModelError> {
    if nombre.trim().is_empty() {
        return Err(errors::ModelError::Validation("nombre required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, nombre: &str, direccion: &str) -> Result<Model, errors::ModelError> {
    validate_nombre(nombre)?;
    let am = ActiveModel {
        nombre: Set(nombre.trim().to_string()),
        direccion: Set(direccion.trim().to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
