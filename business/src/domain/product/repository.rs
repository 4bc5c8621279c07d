use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no product has this id.
    async fn find(&self, id: &str) -> Result<Product, RepositoryError>;
    /// Fails with [`RepositoryError::NotFound`] when no product has this id.
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    /// All products in creation order.
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
