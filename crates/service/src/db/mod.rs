//! Data-access functions over a `DatabaseConnection`.

pub mod auto_service;
pub mod sede_service;
