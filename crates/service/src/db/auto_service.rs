use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, IntoColumnRef, LikeExpr, SimpleExpr},
    ActiveModelTrait, Condition, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use models::{auto, sede};
use tracing::info;
use crate::{auto::domain::AutoInput, errors::ServiceError, pagination::{Page, PageRequest}};

/// List all autos ordered by id.
pub async fn list_autos(db: &DatabaseConnection) -> Result<Vec<auto::Model>, ServiceError> {
    auto::Entity::find()
        .order_by_asc(auto::Column::IdAuto)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// One page of autos; a page past the end comes back empty with the totals filled in.
pub async fn list_autos_paginated(db: &DatabaseConnection, req: PageRequest) -> Result<Page<auto::Model>, ServiceError> {
    let (page_idx, per_page) = req.normalize();
    let paginator = auto::Entity::find()
        .order_by_asc(auto::Column::IdAuto)
        .paginate(db, per_page);
    let total = paginator.num_items().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    // offset stays below the row count, so only in-range pages reach the store
    if page_idx >= total.div_ceil(per_page) {
        return Ok(Page::new(Vec::new(), page_idx, per_page, total));
    }
    let items = paginator.fetch_page(page_idx).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(Page::new(items, page_idx, per_page, total))
}

/// Autos together with their sede in a single statement (inner join).
///
/// Autos without a sede are not part of the result.
pub async fn list_autos_with_sede(db: &DatabaseConnection) -> Result<Vec<(auto::Model, sede::Model)>, ServiceError> {
    let rows = auto::Entity::find()
        .select_also(sede::Entity)
        .join(JoinType::InnerJoin, auto::Relation::Sede.def())
        .order_by_asc(auto::Column::IdAuto)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows.into_iter().filter_map(|(a, s)| s.map(|s| (a, s))).collect())
}

/// Get auto by id.
pub async fn get_auto(db: &DatabaseConnection, id: i32) -> Result<Option<auto::Model>, ServiceError> {
    auto::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Upsert keyed on `id_auto`: overwrite every field of an existing record,
/// otherwise insert with a store-assigned id.
///
/// An id that no longer exists is inserted as a new record rather than rejected.
pub async fn save_auto(db: &DatabaseConnection, input: AutoInput) -> Result<auto::Model, ServiceError> {
    if let Some(sede_id) = input.sede_id {
        let sede = sede::Entity::find_by_id(sede_id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        if sede.is_none() {
            return Err(ServiceError::Validation(format!("sede {} not found", sede_id)));
        }
    }
    let existing = match input.id_auto {
        Some(id) => auto::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?,
        None => None,
    };
    let Some(existing) = existing else {
        if let Some(stale) = input.id_auto {
            info!(id_auto = stale, "auto id not in store, inserting as new record");
        }
        return Ok(auto::create(db, &input.modelo, &input.color, &input.placa, input.sede_id).await?);
    };
    let mut am: auto::ActiveModel = existing.into();
    am.modelo = Set(input.modelo);
    am.color = Set(input.color);
    am.placa = Set(input.placa);
    am.sede_id = Set(input.sede_id);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete auto; returns true if a row was removed.
pub async fn delete_auto(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = auto::Entity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Case-insensitive partial match on modelo, color or the sede's direccion.
///
/// Postgres matches with `ILIKE`. SQLite's `LOWER`/`LIKE` only fold ASCII, so
/// there the rows are fetched with their sede and matched after Unicode case folding.
pub async fn search_autos(db: &DatabaseConnection, term: &str) -> Result<Vec<auto::Model>, ServiceError> {
    match db.get_database_backend() {
        DbBackend::Postgres => ilike_search(term)
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string())),
        _ => {
            let needle = term.to_lowercase();
            let rows = auto::Entity::find()
                .find_also_related(sede::Entity)
                .order_by_asc(auto::Column::IdAuto)
                .all(db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
            Ok(rows
                .into_iter()
                .filter(|(a, s)| matches_folded(&needle, a, s.as_ref()))
                .map(|(a, _)| a)
                .collect())
        }
    }
}

fn ilike_search(term: &str) -> Select<auto::Entity> {
    let pattern = format!("%{}%", escape_like(term));
    auto::Entity::find()
        .join(JoinType::LeftJoin, auto::Relation::Sede.def())
        .filter(
            Condition::any()
                .add(ilike((auto::Entity, auto::Column::Modelo), &pattern))
                .add(ilike((auto::Entity, auto::Column::Color), &pattern))
                .add(ilike((sede::Entity, sede::Column::Direccion), &pattern)),
        )
        .order_by_asc(auto::Column::IdAuto)
}

fn ilike<C: IntoColumnRef>(col: C, pattern: &str) -> SimpleExpr {
    Expr::col(col).ilike(LikeExpr::new(pattern).escape('\\'))
}

/// `needle` must already be lowercased.
fn matches_folded(needle: &str, a: &auto::Model, s: Option<&sede::Model>) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(&a.modelo) || hit(&a.color) || s.is_some_and(|s| hit(&s.direccion))
}

/// Escape LIKE wildcards so user input only matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
