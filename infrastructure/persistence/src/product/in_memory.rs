use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

/// Process-local product store, kept in insertion order.
///
/// Used when no database is configured and as the store behind end-to-end tests.
/// Clones share the same underlying data.
#[derive(Debug, Default, Clone)]
pub struct ProductRepositoryInMemory {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.id() == product.id()) {
            return Err(RepositoryError::Duplicated);
        }

        products.push(product.clone());
        tracing::debug!(product_id = product.id(), "Stored product in memory");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let products = self.products.read().await;
        products
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let stored = products
            .iter_mut()
            .find(|p| p.id() == product.id())
            .ok_or(RepositoryError::NotFound)?;

        *stored = product.clone();
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }
}
