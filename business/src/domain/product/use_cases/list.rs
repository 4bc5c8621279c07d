use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Listing takes no filters yet.
#[derive(Debug, Default)]
pub struct ListProductsInput;

#[derive(Debug, Clone, PartialEq)]
pub struct ListedProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ListedProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListProductsOutput {
    pub products: Vec<ListedProduct>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, input: ListProductsInput) -> Result<ListProductsOutput, ProductError>;
}
