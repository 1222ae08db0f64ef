use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// True for failures caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(models::errors::ModelError::Validation(_)))
    }
}
