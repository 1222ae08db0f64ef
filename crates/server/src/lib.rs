pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod flash;
pub mod views;
pub mod openapi;

pub use startup::run_until;
