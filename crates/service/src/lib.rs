//! Service layer for the autos administration.
//! - `db` holds the data-access functions (the Auto and Sede stores).
//! - `auto` wraps them behind a repository trait and an orchestration service.
//! - Errors and pagination types are shared by both.

pub mod errors;
pub mod pagination;
pub mod db;
pub mod auto;
#[cfg(test)]
pub mod test_support;
