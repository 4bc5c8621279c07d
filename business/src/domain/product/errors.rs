use crate::domain::errors::RepositoryError;
use crate::domain::shared::notification::NotificationError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// One or more field invariants were violated. Displays every message in order.
    #[error(transparent)]
    Validation(#[from] NotificationError),
    #[error("Product not found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[source] RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
