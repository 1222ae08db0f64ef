//! Auto module: domain types, repository seam and orchestration service.
//!
//! Handlers talk to `AutoService`; persistence sits behind `AutoRepository`.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::AutoService;
