use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, sede};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "auto")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_auto: i32,
    pub modelo: String,
    pub color: String,
    pub placa: String,
    pub sede_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Sede }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Sede => Entity::belongs_to(sede::Entity)
                .from(Column::SedeId)
                .to(sede::Column::IdSede)
                .into(),
        }
    }
}

impl Related<sede::Entity> for Entity {
    fn to() -> RelationDef { Relation::Sede.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new auto; the id is assigned by the database.
pub async fn create(
    db: &DatabaseConnection,
    modelo: &str,
    color: &str,
    placa: &str,
    sede_id: Option<i32>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        modelo: Set(modelo.to_string()),
        color: Set(color.to_string()),
        placa: Set(placa.to_string()),
        sede_id: Set(sede_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
