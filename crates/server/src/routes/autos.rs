use std::{fmt, str::FromStr};

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{de, Deserialize, Deserializer};
use service::{
    auto::domain::{AutoConSede, AutoInput},
    db::sede_service,
    pagination::{Page, PageRequest},
};
use tracing::info;

use crate::{
    errors::JsonApiError,
    flash::{self, Flash},
    state::ServerState,
    views::{CrearAuto, EditarAuto, ListaAutos, View, CREAR_AUTOS, EDITAR_AUTOS, LISTAR_AUTOS},
};

pub const LIST_PATH: &str = "/autos/listar";

#[derive(Debug, Deserialize)]
pub struct IdAutoQuery {
    #[serde(rename = "idAuto")]
    pub id_auto: i32,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// Fields posted by the create/edit forms. Empty `idAuto` means a new record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id_auto: Option<i32>,
    #[serde(default)]
    pub modelo: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub placa: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sede_id: Option<i32>,
}

impl From<AutoForm> for AutoInput {
    fn from(f: AutoForm) -> Self {
        AutoInput { id_auto: f.id_auto, modelo: f.modelo, color: f.color, placa: f.placa, sede_id: f.sede_id }
    }
}

fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

fn to_list() -> Redirect { Redirect::to(LIST_PATH) }

#[utoipa::path(
    get, path = "/autos/listar", tag = "autos",
    responses((status = 200, description = "ListarAutos view with every auto and the pending flash message"))
)]
pub async fn listar(State(state): State<ServerState>, jar: CookieJar) -> Result<(CookieJar, Json<View<ListaAutos>>), JsonApiError> {
    let lista_autos = state.autos.list().await?;
    let (jar, mensaje) = flash::take(jar);
    Ok((jar, Json(View::new(LISTAR_AUTOS, ListaAutos { lista_autos, mensaje }))))
}

#[utoipa::path(
    get, path = "/autos/crear", tag = "autos",
    responses((status = 200, description = "CrearAutos view with branch options"))
)]
pub async fn crear(State(state): State<ServerState>) -> Result<Json<View<CrearAuto>>, JsonApiError> {
    let lista_sedes = sede_service::list_sedes(&state.db).await?;
    Ok(Json(View::new(CREAR_AUTOS, CrearAuto { lista_sedes })))
}

#[utoipa::path(
    get, path = "/autos/editar", tag = "autos",
    params(("idAuto" = i32, Query, description = "Auto id")),
    responses(
        (status = 200, description = "EditarAutos view with the auto and branch options"),
        (status = 303, description = "Auto not found, redirect to the list")
    )
)]
pub async fn editar(State(state): State<ServerState>, Query(q): Query<IdAutoQuery>) -> Result<Response, JsonApiError> {
    let Some(auto) = state.autos.find(q.id_auto).await? else {
        info!(id_auto = q.id_auto, "edit requested for missing auto");
        return Ok(to_list().into_response());
    };
    let lista_sedes = sede_service::list_sedes(&state.db).await?;
    Ok(Json(View::new(EDITAR_AUTOS, EditarAuto { auto, lista_sedes })).into_response())
}

#[utoipa::path(
    post, path = "/autos/guardar", tag = "autos",
    request_body(content = String, content_type = "application/x-www-form-urlencoded", description = "idAuto, modelo, color, placa, sedeId"),
    responses(
        (status = 303, description = "Saved (an unknown idAuto is inserted as new), redirect to the list"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Save Failed")
    )
)]
pub async fn guardar(State(state): State<ServerState>, jar: CookieJar, Form(form): Form<AutoForm>) -> Result<(CookieJar, Redirect), JsonApiError> {
    let (saved, outcome) = state.autos.save(form.into()).await?;
    info!(id_auto = saved.id_auto, ?outcome, "saved auto");
    Ok((flash::set(jar, outcome.into()), to_list()))
}

#[utoipa::path(
    get, path = "/autos/eliminar", tag = "autos",
    params(("idAuto" = i32, Query, description = "Auto id")),
    responses((status = 303, description = "Redirect to the list; flash only when a row was removed"))
)]
pub async fn eliminar(State(state): State<ServerState>, jar: CookieJar, Query(q): Query<IdAutoQuery>) -> Result<(CookieJar, Redirect), JsonApiError> {
    let jar = if state.autos.delete(q.id_auto).await? {
        info!(id_auto = q.id_auto, "deleted auto");
        flash::set(jar, Flash::Deleted)
    } else {
        jar
    };
    Ok((jar, to_list()))
}

#[utoipa::path(
    get, path = "/autos/BuscarAuto", tag = "autos",
    params(("searchTerm" = String, Query, description = "Matched against modelo, color and sede direccion")),
    responses(
        (status = 200, description = "ListarAutos view with the matching autos"),
        (status = 303, description = "Blank term, redirect to the list")
    )
)]
pub async fn buscar(State(state): State<ServerState>, Query(q): Query<SearchQuery>) -> Result<Response, JsonApiError> {
    match state.autos.search(&q.search_term).await? {
        Some(lista_autos) => Ok(Json(View::new(LISTAR_AUTOS, ListaAutos { lista_autos, mensaje: None })).into_response()),
        None => Ok(to_list().into_response()),
    }
}

#[utoipa::path(
    get, path = "/autos/paginado", tag = "autos",
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page, default 0"),
        ("size" = Option<u64>, Query, description = "Page size 1..=100, default 10")
    ),
    responses((status = 200, description = "One page of autos with totals"))
)]
pub async fn paginado(State(state): State<ServerState>, Query(req): Query<PageRequest>) -> Result<Json<Page<models::auto::Model>>, JsonApiError> {
    Ok(Json(state.autos.list_paged(req).await?))
}

#[utoipa::path(
    get, path = "/autos/con-sede", tag = "autos",
    responses((status = 200, description = "Autos with their sede, fetched in one query"))
)]
pub async fn con_sede(State(state): State<ServerState>) -> Result<Json<Vec<AutoConSede>>, JsonApiError> {
    Ok(Json(state.autos.list_with_sede().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequest;

    async fn parse(body: &str) -> AutoForm {
        let req = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap();
        Form::<AutoForm>::from_request(req, &()).await.unwrap().0
    }

    #[tokio::test]
    async fn empty_id_means_new_record() {
        let f = parse("idAuto=&modelo=Corolla&color=Rojo&placa=ABC-123&sedeId=").await;
        assert_eq!(f.id_auto, None);
        assert_eq!(f.sede_id, None);
        assert_eq!(f.modelo, "Corolla");
    }

    #[tokio::test]
    async fn numeric_ids_are_parsed() {
        let f = parse("idAuto=12&modelo=Civic&color=Negro&placa=XYZ-987&sedeId=3").await;
        let input: AutoInput = f.into();
        assert_eq!(input.id_auto, Some(12));
        assert_eq!(input.sede_id, Some(3));
    }

    #[tokio::test]
    async fn missing_optional_fields_default() {
        let f = parse("modelo=Yaris").await;
        assert_eq!(f.id_auto, None);
        assert!(f.color.is_empty());
    }
}
