//! View models: a view name plus the attributes the page needs, serialized
//! flat as JSON (`{"view": "ListarAutos", "listaAutos": [...]}`).

use models::{auto, sede};
use serde::Serialize;

pub const LISTAR_AUTOS: &str = "ListarAutos";
pub const CREAR_AUTOS: &str = "CrearAutos";
pub const EDITAR_AUTOS: &str = "EditarAutos";

#[derive(Debug, Serialize)]
pub struct View<T> {
    pub view: &'static str,
    #[serde(flatten)]
    pub model: T,
}

impl<T: Serialize> View<T> {
    pub fn new(view: &'static str, model: T) -> Self { Self { view, model } }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListaAutos {
    pub lista_autos: Vec<auto::Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearAuto {
    pub lista_sedes: Vec<sede::Model>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditarAuto {
    pub auto: auto::Model,
    pub lista_sedes: Vec<sede::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_flattens_model() {
        let v = View::new(LISTAR_AUTOS, ListaAutos { lista_autos: vec![], mensaje: Some("Auto creado exitosamente") });
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["view"], "ListarAutos");
        assert_eq!(json["listaAutos"], serde_json::json!([]));
        assert_eq!(json["mensaje"], "Auto creado exitosamente");
    }

    #[test]
    fn absent_message_is_omitted() {
        let v = View::new(LISTAR_AUTOS, ListaAutos { lista_autos: vec![], mensaje: None });
        let json = serde_json::to_value(&v).unwrap();
        assert!(json.get("mensaje").is_none());
    }
}
