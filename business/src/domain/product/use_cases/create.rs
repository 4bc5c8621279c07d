use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductOutput {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, input: CreateProductInput)
    -> Result<CreateProductOutput, ProductError>;
}
