use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::autos::listar,
        crate::routes::autos::crear,
        crate::routes::autos::editar,
        crate::routes::autos::guardar,
        crate::routes::autos::eliminar,
        crate::routes::autos::buscar,
        crate::routes::autos::paginado,
        crate::routes::autos::con_sede,
    ),
    tags(
        (name = "health"),
        (name = "autos", description = "Vehicle records and their branches")
    )
)]
pub struct ApiDoc;
