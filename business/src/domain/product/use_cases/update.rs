use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct UpdateProductInput {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductOutput {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, input: UpdateProductInput)
    -> Result<UpdateProductOutput, ProductError>;
}
